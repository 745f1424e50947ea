use leptos::prelude::*;

use crate::content::{ANCHOR_DEVELOPMENT, DEVELOPMENT_BULLETS, FEATURES};
use crate::icons::{Glyph, Icon};

#[component]
pub fn DevelopmentSection() -> impl IntoView {
    view! {
        <section id=ANCHOR_DEVELOPMENT class="section section--raised">
            <div class="container">
                <div class="development-grid">
                    <div class="feature-grid">
                        {FEATURES
                            .iter()
                            .enumerate()
                            .map(|(idx, feature)| {
                                // every second tile is offset for the staggered layout
                                let class = if idx % 2 == 1 {
                                    "feature-tile feature-tile--offset"
                                } else {
                                    "feature-tile"
                                };
                                view! {
                                    <div class=class>
                                        <Icon glyph=feature.glyph size="32" class="icon-accent" />
                                        <h4 class="feature-title">{feature.title}</h4>
                                        <p class="feature-text">{feature.text}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="development-copy">
                        <h2 class="section-eyebrow">"Secure Engineering"</h2>
                        <h3 class="section-title">"Security-First Web Development"</h3>
                        <p class="section-lead">
                            "In modern development, security isn't a feature—it's the foundation. "
                            "We build robust, scalable web applications where security is woven into every line of code. "
                            "Our engineering team specializes in remediation, optimization, and long-term reliability."
                        </p>
                        <ul class="bullet-list">
                            {DEVELOPMENT_BULLETS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li class="bullet">
                                            <span class="bullet-icon">
                                                <Icon glyph=Glyph::CheckCircle size="16" class="icon-accent" />
                                            </span>
                                            <span>{*item}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                        <a href="#contact" class="btn btn-outline">"Learn About Our Process"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
