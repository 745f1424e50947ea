use leptos::prelude::*;

use crate::content::{BRAND_ACCENT, BRAND_PRIMARY};
use crate::icons::{Glyph, Icon};

/// Shield + two-tone wordmark, shared by the nav bar and the footer.
#[component]
pub fn BrandMark(#[prop(default = "24")] size: &'static str) -> impl IntoView {
    view! {
        <span class="brand">
            <Icon glyph=Glyph::Shield size=size class="icon-accent" />
            <span class="brand-title">
                {BRAND_PRIMARY}
                <span class="brand-accent">{BRAND_ACCENT}</span>
            </span>
        </span>
    }
}
