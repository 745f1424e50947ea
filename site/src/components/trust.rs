use leptos::prelude::*;

use crate::content::{ANCHOR_TRUST, ETHICS};

#[component]
pub fn TrustSection() -> impl IntoView {
    view! {
        <section id=ANCHOR_TRUST class="section section--dark section--centered">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-eyebrow">"Our Ethics"</h2>
                    <h3 class="section-title">"Transparency & Professional Integrity"</h3>
                </div>
                <div class="ethics-grid">
                    {ETHICS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="ethics-card">
                                    <h4 class="ethics-title">{item.title}</h4>
                                    <p class="ethics-text">{item.text}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
