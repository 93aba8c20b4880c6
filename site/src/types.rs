//! Content data types for the landing page.
//!
//! Every section renders from a fixed `'static` table of these records
//! (see [`crate::content`]). They're designed to be:
//!
//! - **Copy-friendly** - components take them by value, no borrowing issues
//! - **Serializable** - the CLI exports the tables as JSON via serde
//!
//! # Example
//!
//! ```rust
//! use e9th_site::types::{NavItem, RoadmapStatus};
//!
//! let item = NavItem { label: "Utility", target: "utility" };
//! assert_eq!(item.href(), "#utility");
//! assert!(RoadmapStatus::Current.is_current());
//! ```

use serde::Serialize;

use crate::tokens::Accent;

/// A link in the fixed navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Visible link text
    pub label: &'static str,
    /// Element id the link scrolls to (without the leading `#`)
    pub target: &'static str,
}

impl NavItem {
    /// Fragment href for the anchor, e.g. `#tokenomics`.
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Headline figure in the hero stats strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

/// Illustrated card in the "Why E9TH?" block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ValueFeature {
    /// Remote image loaded by the browser
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Holder benefit card in the utility grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UtilityFeature {
    /// Emoji glyph shown above the title
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    /// Element id for cards that are nav targets themselves
    pub anchor: Option<&'static str>,
}

/// One slice of the token distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TokenomicsAllocation {
    pub label: &'static str,
    /// Share of total supply in whole percent
    pub percentage: u8,
    pub accent: Accent,
}

/// Key/value row in the token facts list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TokenDetail {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SecurityFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Progress of a roadmap phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapStatus {
    /// Work in progress, gets the "In Progress" badge
    Current,
    /// Next in line
    Upcoming,
    /// Later
    Future,
}

impl RoadmapStatus {
    pub fn is_current(self) -> bool {
        matches!(self, RoadmapStatus::Current)
    }

    /// Lowercase name, used for the `data-status` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            RoadmapStatus::Current => "current",
            RoadmapStatus::Upcoming => "upcoming",
            RoadmapStatus::Future => "future",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    /// Short label, e.g. "Phase 1"
    pub phase: &'static str,
    pub title: &'static str,
    /// Deliverables in display order
    pub items: &'static [&'static str],
    pub status: RoadmapStatus,
    pub accent: Accent,
}

/// Community channel card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub handle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

/// Column of links in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLinkGroup {
    pub category: &'static str,
    pub links: &'static [&'static str],
}
