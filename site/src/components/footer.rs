use leptos::prelude::*;

use super::BrandMark;
use crate::content::{COPYRIGHT, SOCIAL_LINKS};
use crate::icons::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-row">
                    <BrandMark />
                    <div class="footer-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="footer-link"
                                        aria-label=link.network
                                    >
                                        <Icon glyph=link.glyph />
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="footer-copyright">{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}
