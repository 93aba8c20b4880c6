//! Layout signals handed to [`crate::components::AppLayout`].
//!
//! The page shell reads a sidebar flag and a viewport classification. Both
//! are passed in explicitly: the static renderer builds them from config,
//! the wasm entry point from `window.innerWidth`.

use serde::{Deserialize, Serialize};

/// Widths strictly below this many CSS pixels count as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Viewport class derived from the window width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn from_width(width: u32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Viewport::Mobile)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Viewport::Mobile => "mobile",
            Viewport::Desktop => "desktop",
        }
    }
}

/// Shared UI state read by the page shell.
///
/// Neither field changes the rendered layout yet; they are exposed on the
/// shell element as `data-sidebar` / `data-viewport`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutContext {
    pub sidebar_open: bool,
    pub viewport: Viewport,
}

impl LayoutContext {
    pub fn for_width(width: u32) -> Self {
        Self {
            viewport: Viewport::from_width(width),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn toggle_sidebar(self) -> Self {
        Self {
            sidebar_open: !self.sidebar_open,
            ..self
        }
    }

    #[must_use]
    pub fn with_width(self, width: u32) -> Self {
        Self {
            viewport: Viewport::from_width(width),
            ..self
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    pub fn sidebar_attr(&self) -> &'static str {
        if self.sidebar_open { "open" } else { "closed" }
    }
}
