//! Mobile menu state for the navigation bar.
//!
//! Kept as a plain enum with pure transitions so the component only wires
//! clicks to these functions and the behavior is testable without a DOM.

use serde::Serialize;

/// Visibility of the collapsed mobile nav panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    /// Panel hidden, hamburger icon shown. Every mount starts here.
    #[default]
    Closed,
    /// Panel listed below the bar, close icon shown.
    Open,
}

impl MenuState {
    /// Menu button activation.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// A mobile nav link was followed; the panel always collapses.
    #[must_use]
    pub fn on_link_activated(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Value for the menu button's `aria-expanded`.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// SVG path for the menu button: close cross when open, hamburger otherwise.
    pub fn icon_path(self) -> &'static str {
        match self {
            MenuState::Open => ICON_CLOSE,
            MenuState::Closed => ICON_HAMBURGER,
        }
    }
}

pub const ICON_HAMBURGER: &str = "M4 6h16M4 12h16M4 18h16";
pub const ICON_CLOSE: &str = "M6 18L18 6M6 6l12 12";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_alternates_strictly() {
        let mut state = MenuState::Closed;
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = state.toggle();
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![MenuState::Open, MenuState::Closed, MenuState::Open, MenuState::Closed]
        );
    }

    #[test]
    fn double_toggle_is_identity() {
        for start in [MenuState::Closed, MenuState::Open] {
            assert_eq!(start.toggle().toggle(), start);
        }
    }

    #[test]
    fn link_activation_closes() {
        assert_eq!(MenuState::Open.on_link_activated(), MenuState::Closed);
        assert_eq!(MenuState::Closed.on_link_activated(), MenuState::Closed);
    }

    #[test]
    fn icon_and_aria_follow_state() {
        assert_eq!(MenuState::Closed.icon_path(), ICON_HAMBURGER);
        assert_eq!(MenuState::Open.icon_path(), ICON_CLOSE);
        assert_eq!(MenuState::Open.aria_expanded(), "true");
        assert_eq!(MenuState::Closed.aria_expanded(), "false");
    }
}
