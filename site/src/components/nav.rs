use leptos::prelude::*;

use super::BrandMark;
use crate::content::NAV_LINKS;
use crate::icons::{Glyph, Icon};
use crate::state::NavState;

#[component]
pub fn NavBar() -> impl IntoView {
    // Always starts closed and unscrolled; the first scroll event decides.
    let state = RwSignal::new(NavState::default());

    #[cfg(feature = "csr")]
    track_window_scroll(state);

    let dismiss = dismiss_on_navigate::<leptos::ev::MouseEvent>(state);
    let toggle = move |_| {
        state.update(|s| {
            s.toggle_menu();
            tracing::trace!(open = s.is_menu_open(), "mobile menu toggled");
        })
    };

    view! {
        <nav class=move || state.with(NavState::nav_class)>
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <BrandMark size="32" />
                </a>

                // Desktop
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
                        .collect::<Vec<_>>()}
                    <a href="#contact" class="nav-cta">"Get Started"</a>
                </div>

                // Mobile toggle
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || state.with(|s| s.is_menu_open().to_string())
                    on:click=toggle
                >
                    <Show
                        when=move || state.with(NavState::is_menu_open)
                        fallback=|| view! { <Icon glyph=Glyph::Menu /> }
                    >
                        <Icon glyph=Glyph::Close />
                    </Show>
                </button>
            </div>

            <Show when=move || state.with(NavState::is_menu_open)>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        {NAV_LINKS
                            .iter()
                            .map(move |link| {
                                view! {
                                    <a href=link.href class="drawer-link" on:click=dismiss>
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <a href="#contact" class="drawer-cta" on:click=dismiss>
                            "Get in Touch"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Click handler for every drawer entry: navigating closes the menu.
fn dismiss_on_navigate<E: 'static>(state: RwSignal<NavState>) -> impl Fn(E) + Copy + 'static {
    move |_| {
        state.update(NavState::dismiss_menu);
        tracing::trace!("mobile menu dismissed");
    }
}

/// Follow the window's vertical offset for as long as the bar is mounted.
#[cfg(feature = "csr")]
fn track_window_scroll(state: RwSignal<NavState>) {
    use crate::listener::{ScrollSubscription, release_on_cleanup};

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        state.maybe_update(|s| s.observe_scroll(offset));
    });
    release_on_cleanup(ScrollSubscription::new(handle));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_entry_closes_open_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(NavState::default());
            state.update(NavState::toggle_menu);
            assert!(state.with(NavState::is_menu_open));

            let dismiss = dismiss_on_navigate::<()>(state);
            dismiss(());
            assert!(!state.with(NavState::is_menu_open));

            // already closed: stays closed
            dismiss(());
            assert!(!state.with(NavState::is_menu_open));
        });
    }

    #[test]
    fn dismiss_keeps_scroll_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(NavState::default());
            state.update(|s| {
                s.observe_scroll(120.0);
                s.toggle_menu();
            });

            dismiss_on_navigate::<()>(state)(());
            assert!(state.with(NavState::is_scrolled));
            assert!(!state.with(NavState::is_menu_open));
        });
    }
}
