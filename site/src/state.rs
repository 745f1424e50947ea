//! Navigation bar state.
//!
//! The bar tracks two independent booleans: whether the mobile menu is
//! expanded and whether the page has scrolled past [`SCROLL_THRESHOLD`].
//! Each is derived only from its own event stream, so the latest event
//! always wins.

/// Vertical offset (CSS pixels) above which the bar switches to its solid
/// treatment. The comparison is strict: exactly 50 is still "top of page".
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// `true` when `offset` is past [`SCROLL_THRESHOLD`].
pub fn past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Flip the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Collapse the mobile menu. Called when a link or call-to-action in the
    /// open menu is selected.
    pub fn dismiss_menu(&mut self) {
        self.menu_open = false;
    }

    /// Re-evaluate the scrolled flag for a new viewport offset.
    ///
    /// Returns `true` when the flag changed, so callers can skip redundant
    /// reactive writes.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = past_threshold(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Class list for the `<nav>` element.
    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "nav nav--scrolled"
        } else {
            "nav"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_unscrolled() {
        let state = NavState::default();
        assert!(!state.is_menu_open());
        assert!(!state.is_scrolled());
        assert_eq!(state.nav_class(), "nav");
    }

    #[test]
    fn scroll_threshold_is_not_sticky() {
        let mut state = NavState::default();
        assert!(state.observe_scroll(51.0));
        assert!(state.is_scrolled());
        assert_eq!(state.nav_class(), "nav nav--scrolled");

        assert!(state.observe_scroll(10.0));
        assert!(!state.is_scrolled());
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!past_threshold(50.0));
        assert!(past_threshold(50.5));
        assert!(!past_threshold(0.0));
    }

    #[test]
    fn repeated_offsets_report_no_change() {
        let mut state = NavState::default();
        assert!(!state.observe_scroll(0.0));
        assert!(state.observe_scroll(300.0));
        assert!(!state.observe_scroll(900.0));
        assert!(state.is_scrolled());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn dismiss_closes_open_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.dismiss_menu();
        assert!(!state.is_menu_open());

        // closed stays closed
        state.dismiss_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn menu_and_scroll_are_independent() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.observe_scroll(120.0);
        state.dismiss_menu();
        assert!(state.is_scrolled());
        assert!(!state.is_menu_open());
    }
}
