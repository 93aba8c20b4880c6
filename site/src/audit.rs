//! Content checks over the rendered page and the data tables.
//!
//! The browser silently ignores a fragment link whose target id is missing,
//! so broken anchors only show up here.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::content::{NAV_ITEMS, ROADMAP_PHASES, allocation_total};

static ID_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?:^|\s)id="([^"]+)""#).unwrap());
static FRAGMENT_HREF: Lazy<Regex> = Lazy::new(|| Regex::new(r##"href="#([^"]+)""##).unwrap());

/// A problem found by [`audit_html`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIssue {
    #[error("link target #{target} has no matching element id")]
    MissingAnchor { target: String },
    #[error("element id \"{id}\" is used more than once")]
    DuplicateId { id: String },
    #[error("allocation shares add up to {total}%, expected 100%")]
    AllocationTotal { total: u32 },
    #[error("{count} roadmap phases are marked current, expected exactly 1")]
    CurrentPhase { count: usize },
}

/// Element ids in document order, duplicates included.
pub fn element_ids(html: &str) -> Vec<String> {
    ID_ATTR
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

/// Distinct non-empty fragment targets of `href="#..."` links.
pub fn fragment_targets(html: &str) -> BTreeSet<String> {
    FRAGMENT_HREF
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

/// Check a rendered document and the content tables it was built from.
///
/// Every nav target and every in-page fragment link must resolve to exactly
/// one element id. Bare `href="#"` links are placeholders and are skipped.
pub fn audit_html(html: &str) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    let ids = element_ids(html);
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for id in &ids {
        if !seen.insert(id.as_str()) && reported.insert(id.as_str()) {
            issues.push(ContentIssue::DuplicateId { id: id.clone() });
        }
    }

    let mut targets = fragment_targets(html);
    targets.extend(NAV_ITEMS.iter().map(|item| item.target.to_string()));
    for target in targets {
        if !seen.contains(target.as_str()) {
            issues.push(ContentIssue::MissingAnchor { target });
        }
    }

    issues.extend(audit_tables());
    issues
}

/// Data-authoring invariants that don't need a render.
pub fn audit_tables() -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    let total = allocation_total();
    if total != 100 {
        issues.push(ContentIssue::AllocationTotal { total });
    }

    let count = ROADMAP_PHASES.iter().filter(|p| p.status.is_current()).count();
    if count != 1 {
        issues.push(ContentIssue::CurrentPhase { count });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_NAV_IDS: &str = r#"<div id="utility"></div><div id="tokenomics"></div>
<div id="staking"></div><div id="security"></div><div id="litepaper"></div>"#;

    #[test]
    fn collects_ids_but_not_data_attributes() {
        let html = r#"<div id="a" data-id="x"><span class="b" id="c"></span></div>"#;
        assert_eq!(element_ids(html), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn skips_bare_hash_links() {
        let html = r##"<a href="#">x</a><a href="#hero">y</a><a href="https://e9th.io/#z">z</a>"##;
        let targets: Vec<_> = fragment_targets(html).into_iter().collect();
        assert_eq!(targets, vec!["hero".to_string()]);
    }

    #[test]
    fn clean_document_has_no_issues() {
        assert!(audit_html(ALL_NAV_IDS).is_empty());
    }

    #[test]
    fn reports_missing_nav_target() {
        let html = ALL_NAV_IDS.replace(r#"id="staking""#, r#"id="stake""#);
        assert_eq!(
            audit_html(&html),
            vec![ContentIssue::MissingAnchor {
                target: "staking".into()
            }]
        );
    }

    #[test]
    fn reports_dangling_fragment_link() {
        let html = format!(r##"{ALL_NAV_IDS}<a href="#roadmap">Roadmap</a>"##);
        assert_eq!(
            audit_html(&html),
            vec![ContentIssue::MissingAnchor {
                target: "roadmap".into()
            }]
        );
    }

    #[test]
    fn reports_each_duplicate_once() {
        let html = format!(r#"{ALL_NAV_IDS}<p id="utility"></p><p id="utility"></p>"#);
        assert_eq!(
            audit_html(&html),
            vec![ContentIssue::DuplicateId {
                id: "utility".into()
            }]
        );
    }

    #[test]
    fn shipped_tables_pass() {
        assert!(audit_tables().is_empty());
    }

    #[test]
    fn issues_render_readable_messages() {
        let issue = ContentIssue::AllocationTotal { total: 95 };
        assert_eq!(issue.to_string(), "allocation shares add up to 95%, expected 100%");
        let issue = ContentIssue::MissingAnchor {
            target: "staking".into(),
        };
        assert_eq!(issue.to_string(), "link target #staking has no matching element id");
    }
}
