use leptos::prelude::*;

use crate::content::{ANCHOR_CONTACT, CONTACT_EMAIL, contact_href};
use crate::icons::{Glyph, Icon};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=ANCHOR_CONTACT class="section section--dark">
            <div class="container container--narrow">
                <div class="contact-panel">
                    <div class="contact-glow"></div>
                    <h2 class="section-title">"Request Your Professional Consultation"</h2>
                    <p class="section-lead">
                        "Ready to secure your business? Our team of specialists is standing by for confidential "
                        "discussions regarding your security posture or development needs."
                    </p>
                    <div class="contact-card">
                        <div class="contact-card-header">
                            <Icon glyph=Glyph::Mail size="24" class="icon-accent" />
                            <span>"Official Communications"</span>
                        </div>
                        <a href=contact_href() class="contact-email">{CONTACT_EMAIL}</a>
                    </div>
                    <p class="contact-note">
                        <Icon glyph=Glyph::Lock size="16" />
                        <span>"End-to-end encrypted initial handling of all inquiries."</span>
                    </p>
                </div>
            </div>
        </section>
    }
}
