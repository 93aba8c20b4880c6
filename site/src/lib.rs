//! # e9th-site
//!
//! The E9TH landing page as Leptos components, plus a static renderer.
//!
//! The same component tree serves two targets:
//!
//! - **Static HTML** (`ssr` feature, default) - [`render_page`] produces a
//!   complete document; the `e9th` CLI writes it to disk.
//! - **Browser** (`csr` feature) - the `e9th-landing` wasm crate mounts
//!   [`components::AppLayout`] to the body so the mobile menu is live.
//!
//! ## Quick Start
//!
//! ```rust
//! use e9th_site::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="tokenomics""#));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content record types
//! - [`content`] - the fixed tables every section renders
//! - [`tokens`] - design tokens (colors as CSS custom properties)
//! - [`styles`] - stylesheet built on the tokens
//! - [`menu`] - mobile menu state machine
//! - [`layout`] - sidebar / viewport signals passed to the shell
//! - [`components`] - Leptos components
//! - [`audit`] - anchor and data-table checks

pub mod audit;
pub mod components;
pub mod content;
pub mod layout;
pub mod menu;
pub mod styles;
pub mod tokens;
pub mod types;

pub use audit::{ContentIssue, audit_html};
pub use layout::{LayoutContext, Viewport};
pub use menu::MenuState;

/// Document-level settings for the static render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// `<html lang>` value
    pub lang: String,
    /// Layout signals baked into the shell
    pub layout: LayoutContext,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "E9TH — Where utility comes full circle".into(),
            description: "Unlock discounts, early access, and exclusive products on Solana.".into(),
            lang: "en".into(),
            layout: LayoutContext::default(),
        }
    }
}

/// Render the full landing page to an HTML document string.
///
/// Includes `<!DOCTYPE html>`; the mobile menu is rendered closed.
#[cfg(feature = "ssr")]
pub fn render_page(options: &PageOptions) -> String {
    use components::PageDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let doc = view! { <PageDocument options=options.clone() /> };
    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), viewport = options.layout.viewport.as_str(), "rendered page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the default page and check it with [`audit_html`].
#[cfg(feature = "ssr")]
pub fn audit(options: &PageOptions) -> Vec<ContentIssue> {
    audit_html(&render_page(options))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{
        ALLOCATIONS, FOOTER_LINKS, NAV_ITEMS, ROADMAP_PHASES, SECURITY_FEATURES, SOCIAL_LINKS,
        UTILITY_FEATURES, VALUE_FEATURES,
    };
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    fn page() -> String {
        render_page(&PageOptions::default())
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[test]
    fn renders_complete_document() {
        let html = page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains("--e9-bg: #0B0B10;"));
    }

    #[test]
    fn every_nav_target_resolves() {
        let html = page();
        let ids = audit::element_ids(&html);
        for item in NAV_ITEMS {
            assert!(
                ids.iter().any(|id| id == item.target),
                "{} -> {} has no element",
                item.label,
                item.href()
            );
            assert!(html.contains(&format!(r##"href="#{}""##, item.target)));
        }
    }

    #[test]
    fn shipped_page_passes_audit() {
        assert_eq!(audit(&PageOptions::default()), vec![]);
    }

    #[test]
    fn sections_render_in_layout_order() {
        let html = page();
        let order = [
            r#"class="nav""#,
            r#"id="hero""#,
            r#"id="litepaper""#,
            r#"id="utility""#,
            r#"id="tokenomics""#,
            r#"id="security""#,
            r#"id="roadmap""#,
            r#"id="community""#,
            r#"class="footer""#,
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn card_counts_match_tables() {
        let html = page();
        assert_eq!(count(&html, r#"class="card utility-card""#), UTILITY_FEATURES.len());
        assert_eq!(count(&html, r#"class="card security-card""#), SECURITY_FEATURES.len());
        assert_eq!(count(&html, r#"class="card social-card""#), SOCIAL_LINKS.len());
        assert_eq!(count(&html, r#"class="value-card""#), VALUE_FEATURES.len());
        assert_eq!(count(&html, r#"class="footer-group""#), FOOTER_LINKS.len());
        assert_eq!(count(&html, r#"class="allocation-row""#), ALLOCATIONS.len());
        assert_eq!(count(&html, r#"class="nav-link""#), NAV_ITEMS.len());
        assert_eq!(count(&html, r#"class="utility-card""#), 0);
        assert_eq!(UTILITY_FEATURES.len(), 5);
        assert_eq!(SECURITY_FEATURES.len(), 5);
        assert_eq!(SOCIAL_LINKS.len(), 3);
    }

    #[test]
    fn mobile_panel_hidden_on_first_render() {
        let html = page();
        assert_eq!(count(&html, r#"class="nav-mobile-link""#), 0);
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(crate::menu::ICON_HAMBURGER));
    }

    #[test]
    fn open_menu_lists_every_link_again() {
        use crate::components::Navigation;

        let html = view! { <Navigation initial_menu=MenuState::Open /> }.to_html();
        assert_eq!(count(&html, r#"class="nav-mobile-link""#), NAV_ITEMS.len());
        assert_eq!(count(&html, r#"class="nav-link""#), NAV_ITEMS.len());
        assert_eq!(count(&html, "Launch App"), 2);
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(crate::menu::ICON_CLOSE));
    }

    #[test]
    fn allocation_bar_widths_match_shares() {
        let html = page();
        let segment = Regex::new(r#"class="allocation-segment"[^>]*width: (\d+)%"#).unwrap();
        let widths: Vec<u32> = segment
            .captures_iter(&html)
            .map(|c| c[1].parse().unwrap())
            .collect();
        let expected: Vec<u32> = ALLOCATIONS.iter().map(|a| u32::from(a.percentage)).collect();
        assert_eq!(widths, expected);
        assert_eq!(widths.iter().sum::<u32>(), 100);
    }

    #[test]
    fn legend_follows_table_order() {
        let html = page();
        let positions: Vec<usize> = ALLOCATIONS
            .iter()
            .map(|a| {
                let label = a.label.replace('&', "&amp;");
                html.find(&format!(r#"title="{}: {}%""#, label, a.percentage))
                    .unwrap_or_else(|| panic!("no segment for {}", a.label))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn single_in_progress_badge_on_current_phase() {
        let html = page();
        assert_eq!(count(&html, "In Progress"), 1);

        let current = html.find(r#"data-status="current""#).unwrap();
        let upcoming = html.find(r#"data-status="upcoming""#).unwrap();
        let badge = html.find("In Progress").unwrap();
        assert!(current < badge && badge < upcoming);
    }

    #[test]
    fn connectors_between_phases_only() {
        let html = page();
        assert_eq!(count(&html, r#"class="roadmap-connector""#), ROADMAP_PHASES.len() - 1);
    }

    #[test]
    fn layout_signals_exposed_on_shell() {
        let options = PageOptions {
            layout: LayoutContext::for_width(390).toggle_sidebar(),
            ..PageOptions::default()
        };
        let html = render_page(&options);
        assert!(html.contains(r#"data-sidebar="open""#));
        assert!(html.contains(r#"data-viewport="mobile""#));

        let desktop = page();
        assert!(desktop.contains(r#"data-sidebar="closed""#));
        assert!(desktop.contains(r#"data-viewport="desktop""#));
    }

    #[test]
    fn viewport_does_not_change_composition() {
        let mobile = render_page(&PageOptions {
            layout: LayoutContext::for_width(320),
            ..PageOptions::default()
        });
        let desktop = page();
        assert_eq!(
            mobile.replace(r#"data-viewport="mobile""#, r#"data-viewport="desktop""#),
            desktop
        );
    }
}
