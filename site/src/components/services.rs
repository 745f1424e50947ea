use leptos::prelude::*;

use crate::content::{ANCHOR_SERVICES, SERVICES, ServiceEntry};
use crate::icons::{Glyph, Icon};

/// The services grid: one [`ServiceCard`] per entry, in declaration order.
#[component]
pub fn ServiceList() -> impl IntoView {
    view! {
        <section id=ANCHOR_SERVICES class="section section--dark">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-eyebrow">"Enterprise Services"</h2>
                    <h3 class="section-title">"Strategic Security Solutions"</h3>
                    <p class="section-lead">
                        "We don't just find bugs; we provide strategic business outcomes that mitigate "
                        "risk and protect your company's most valuable digital assets."
                    </p>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|entry| view! { <ServiceCard entry=entry /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ServiceCard(entry: &'static ServiceEntry) -> impl IntoView {
    view! {
        <article class="service-card">
            <div class="service-icon">
                <Icon glyph=entry.glyph size="28" class="icon-accent" />
            </div>
            <h3 class="service-title">{entry.title}</h3>
            <p class="service-description">{entry.description}</p>
            <div class="service-impact">
                <Icon glyph=Glyph::CheckCircle size="16" class="icon-ok" />
                <span>"Impact: " <strong>{entry.impact}</strong></span>
            </div>
        </article>
    }
}
