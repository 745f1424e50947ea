//! Full HTML document used for static export.

use leptos::prelude::*;

use super::App;
use crate::PageOptions;
use crate::styles::PAGE_CSS;

#[component]
pub fn PageDocument(options: PageOptions) -> impl IntoView {
    let PageOptions {
        title,
        lang,
        description,
    } = options;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}
