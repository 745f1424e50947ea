use leptos::prelude::*;

use crate::content::{HERO_STATS, TERMINAL_PROMPT, TERMINAL_TRANSCRIPT, TerminalLine};
use crate::icons::{Glyph, Icon};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-glow hero-glow--right"></div>
            <div class="hero-glow hero-glow--left"></div>
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <Icon glyph=Glyph::Lock size="12" />
                            <span>"Secure Your Future"</span>
                        </div>
                        <h1 class="hero-title">
                            "Protecting the "
                            <br />
                            <span class="hero-title-accent">"Digital Frontline"</span>
                        </h1>
                        <p class="hero-description">
                            "CyberFortify delivers specialized Cybersecurity & Secure Web Development solutions. "
                            "In an era where breaches cost millions, we ensure your organization proactively "
                            "identifies and neutralizes threats before they emerge."
                        </p>
                        <div class="hero-actions">
                            <a href="#contact" class="btn btn-primary">"Schedule a Consultation"</a>
                            <a href="#services" class="btn btn-secondary">
                                <span>"View Solutions"</span>
                                <Icon glyph=Glyph::ChevronRight size="20" />
                            </a>
                        </div>
                        <div class="hero-stats">
                            {HERO_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="hero-stat">
                                            <div class="hero-stat-value">{stat.value}</div>
                                            <div class="hero-stat-label">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <Terminal />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Terminal() -> impl IntoView {
    view! {
        <div class="hero-terminal">
            <div class="terminal-header">
                <div class="terminal-dot red"></div>
                <div class="terminal-dot yellow"></div>
                <div class="terminal-dot green"></div>
                <span class="terminal-title">{TERMINAL_PROMPT}</span>
            </div>
            <div class="terminal-body">
                {TERMINAL_TRANSCRIPT
                    .iter()
                    .map(|line| match line {
                        TerminalLine::Command(cmd) => {
                            view! {
                                <div class=line.css_class()>
                                    <span class="terminal-prompt">"$"</span>
                                    <span class="terminal-command">{*cmd}</span>
                                </div>
                            }
                                .into_any()
                        }
                        _ => view! { <div class=line.css_class()>{line.text()}</div> }.into_any(),
                    })
                    .collect::<Vec<_>>()}
                <div class="terminal-footer">
                    <Icon glyph=Glyph::Activity size="16" class="icon-accent" />
                    <span>"Real-time monitoring active"</span>
                </div>
            </div>
        </div>
    }
}
