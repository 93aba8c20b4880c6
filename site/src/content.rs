//! Fixed content tables rendered by the sections.
//!
//! Copy edits happen here; components never hard-code strings that belong
//! to a table. Allocation percentages must add up to 100, and every
//! [`NAV_ITEMS`] target must exist as an element id on the page
//! (both are checked by [`crate::audit`]).

use crate::tokens::Accent;
use crate::types::{
    FooterLinkGroup, HeroStat, NavItem, RoadmapPhase, RoadmapStatus, SecurityFeature, SocialLink,
    TokenDetail, TokenomicsAllocation, UtilityFeature, ValueFeature,
};

pub const BRAND: &str = "E9TH";
pub const TAGLINE: &str = "Where utility comes full circle.";

/// Prefix shared by every remote image.
pub const CDN_PREFIX: &str = "https://d64gsuwffb70l.cloudfront.net/68d0ef5ed4cf87616e216bdd";

pub const HERO_BACKGROUND: &str =
    "https://d64gsuwffb70l.cloudfront.net/68d0ef5ed4cf87616e216bdd_1758523271093_80515c4e.webp";
pub const UTILITY_BACKGROUND: &str =
    "https://d64gsuwffb70l.cloudfront.net/68d0ef5ed4cf87616e216bdd_1758523281512_29096860.webp";

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Utility", target: "utility" },
    NavItem { label: "Tokenomics", target: "tokenomics" },
    NavItem { label: "Staking", target: "staking" },
    NavItem { label: "Security", target: "security" },
    NavItem { label: "Litepaper", target: "litepaper" },
];

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat { value: "10B", label: "Total Supply", accent: Accent::Violet },
    HeroStat { value: "$0.00005", label: "Initial Price", accent: Accent::Cyan },
    HeroStat { value: "Deflationary", label: "Token Model", accent: Accent::Violet },
];

pub const VALUE_FEATURES: [ValueFeature; 3] = [
    ValueFeature {
        image: "https://d64gsuwffb70l.cloudfront.net/68d0ef5ed4cf87616e216bdd_1758523272270_4dc05b93.webp",
        title: "Instant Utility",
        description: "Use E9TH to redeem discounts, access tools, and unlock services from day one.",
    },
    ValueFeature {
        image: "https://d64gsuwffb70l.cloudfront.net/68d0ef5ed4cf87616e216bdd_1758523273960_b16c4fc6.webp",
        title: "Deflationary Design",
        description: "Supply reduces with every transfer, aligning growth with scarcity.",
    },
    ValueFeature {
        image: "https://d64gsuwffb70l.cloudfront.net/68d0ef5ed4cf87616e216bdd_1758523275646_1c0742c8.webp",
        title: "Transparent Security",
        description: "Multisig governance, pausing, blacklisting, and on-chain logs to protect holders.",
    },
];

pub const UTILITY_FEATURES: [UtilityFeature; 5] = [
    UtilityFeature {
        icon: "🎟️",
        title: "Discounts on services",
        description: "Pay less with E9TH.",
        accent: Accent::Violet,
        anchor: None,
    },
    UtilityFeature {
        icon: "🚀",
        title: "Early access",
        description: "Be first in line for new products and drops.",
        accent: Accent::Cyan,
        anchor: None,
    },
    UtilityFeature {
        icon: "🔒",
        title: "Staking",
        description: "Lock tokens, earn transparent rewards.",
        accent: Accent::Violet,
        anchor: Some("staking"),
    },
    UtilityFeature {
        icon: "🎁",
        title: "Airdrops",
        description: "Batched and verifiable, rewarding the community.",
        accent: Accent::Cyan,
        anchor: None,
    },
    UtilityFeature {
        icon: "🔑",
        title: "Exclusives",
        description: "Gated software, solutions, and premium offerings.",
        accent: Accent::Violet,
        anchor: None,
    },
];

pub const ALLOCATIONS: [TokenomicsAllocation; 5] = [
    TokenomicsAllocation { label: "Public Sale", percentage: 40, accent: Accent::Violet },
    TokenomicsAllocation { label: "Team & Founders", percentage: 20, accent: Accent::Cyan },
    TokenomicsAllocation { label: "Marketing & Rewards", percentage: 15, accent: Accent::Violet },
    TokenomicsAllocation { label: "Liquidity", percentage: 15, accent: Accent::Cyan },
    TokenomicsAllocation { label: "Treasury", percentage: 10, accent: Accent::Silver },
];

pub const TOKEN_DETAILS: [TokenDetail; 4] = [
    TokenDetail { label: "Ticker", value: "E9TH" },
    TokenDetail { label: "Chain", value: "Solana (SPL / Token-2022)" },
    TokenDetail { label: "Supply", value: "10,000,000,000 (deflationary)" },
    TokenDetail { label: "Initial Price", value: "$0.00005" },
];

pub const SECURITY_FEATURES: [SecurityFeature; 5] = [
    SecurityFeature { icon: "🔑", title: "Role-based access", description: "Owner, Operator, Treasury" },
    SecurityFeature { icon: "⛓️", title: "Multisig controls", description: "For sensitive actions" },
    SecurityFeature { icon: "🛡️", title: "Emergency pause", description: "& blacklist protection" },
    SecurityFeature { icon: "⏳", title: "Optional timelocks", description: "For critical changes" },
    SecurityFeature { icon: "📖", title: "Open-source code", description: "& audits" },
];

pub const ROADMAP_PHASES: [RoadmapPhase; 3] = [
    RoadmapPhase {
        phase: "Phase 1",
        title: "Foundation",
        items: &["Token launch", "Staking v1", "Website & litepaper"],
        status: RoadmapStatus::Current,
        accent: Accent::Violet,
    },
    RoadmapPhase {
        phase: "Phase 2",
        title: "Integration",
        items: &["Partner integrations", "Holder dashboard", "Live burn tracker"],
        status: RoadmapStatus::Upcoming,
        accent: Accent::Cyan,
    },
    RoadmapPhase {
        phase: "Phase 3",
        title: "Expansion",
        items: &["Expanded marketplace", "Mobile app", "Scaling rewards"],
        status: RoadmapStatus::Future,
        accent: Accent::Silver,
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Twitter/X",
        handle: "@E9TH",
        description: "Latest updates and announcements",
        icon: "🐦",
        accent: Accent::Cyan,
    },
    SocialLink {
        name: "Discord",
        handle: "Join Community",
        description: "Chat with holders and team",
        icon: "💬",
        accent: Accent::Violet,
    },
    SocialLink {
        name: "Explorer",
        handle: "View Contract",
        description: "On-chain transparency",
        icon: "🔍",
        accent: Accent::Cyan,
    },
];

pub const FOOTER_LINKS: [FooterLinkGroup; 4] = [
    FooterLinkGroup { category: "Product", links: &["Utility", "Tokenomics", "Staking", "Airdrops"] },
    FooterLinkGroup { category: "Resources", links: &["Litepaper", "Security", "Brand Kit", "Updates"] },
    FooterLinkGroup { category: "Community", links: &["Twitter/X", "Discord", "Partners", "Contact"] },
    FooterLinkGroup { category: "Legal", links: &["Terms of Service", "Privacy Policy", "Risk Disclosure"] },
];

/// Sum of all allocation percentages (should be 100).
pub fn allocation_total() -> u32 {
    ALLOCATIONS.iter().map(|a| u32::from(a.percentage)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn allocations_sum_to_one_hundred() {
        assert_eq!(allocation_total(), 100);
        let shares: Vec<u8> = ALLOCATIONS.iter().map(|a| a.percentage).collect();
        assert_eq!(shares, vec![40, 20, 15, 15, 10]);
    }

    #[test]
    fn exactly_one_current_phase() {
        let current: Vec<_> = ROADMAP_PHASES.iter().filter(|p| p.status.is_current()).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].title, "Foundation");
    }

    #[test]
    fn nav_targets_are_plain_ids() {
        for item in NAV_ITEMS {
            assert!(!item.target.starts_with('#'), "{} carries a leading #", item.label);
            assert!(!item.target.is_empty());
        }
    }

    #[test]
    fn remote_images_share_the_cdn_prefix() {
        assert!(HERO_BACKGROUND.starts_with(CDN_PREFIX));
        assert!(UTILITY_BACKGROUND.starts_with(CDN_PREFIX));
        for feature in VALUE_FEATURES {
            assert!(feature.image.starts_with(CDN_PREFIX), "{}", feature.title);
        }
    }
}
