//! Subcommand implementations.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use e9th_site::content;
use e9th_site::types::{
    FooterLinkGroup, HeroStat, NavItem, RoadmapPhase, SecurityFeature, SocialLink, TokenDetail,
    TokenomicsAllocation, UtilityFeature, ValueFeature,
};
use e9th_site::{audit_html, render_page};

use crate::config::SiteConfig;

pub fn build(config: Option<&Path>, out: Option<&Path>, viewport_width: Option<u32>) -> Result<ExitCode> {
    let config = SiteConfig::load(config)?;
    let options = config.page_options(viewport_width);
    let out_dir = config.out_dir(out);

    let html = render_page(&options);

    // Build anyway; `check` is the gate.
    for issue in audit_html(&html) {
        warn!("{issue}");
    }

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let index = out_dir.join("index.html");
    std::fs::write(&index, &html).with_context(|| format!("failed to write {}", index.display()))?;

    info!(
        path = %index.display(),
        bytes = html.len(),
        viewport = options.layout.viewport.as_str(),
        "page written"
    );
    println!("Wrote {} ({} bytes)", index.display(), html.len());
    Ok(ExitCode::SUCCESS)
}

pub fn check(config: Option<&Path>) -> Result<ExitCode> {
    let config = SiteConfig::load(config)?;
    let html = render_page(&config.page_options(None));
    let issues = audit_html(&html);

    if issues.is_empty() {
        println!(
            "ok: {} nav anchors resolve, {} allocations total {}%",
            content::NAV_ITEMS.len(),
            content::ALLOCATIONS.len(),
            content::allocation_total()
        );
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &issues {
        println!("error: {issue}");
    }
    println!("{} issue(s) found", issues.len());
    Ok(ExitCode::FAILURE)
}

/// Every content table, for `content --json`.
#[derive(Serialize)]
struct ContentExport {
    brand: &'static str,
    tagline: &'static str,
    nav: &'static [NavItem],
    hero_stats: &'static [HeroStat],
    value_features: &'static [ValueFeature],
    utilities: &'static [UtilityFeature],
    allocations: &'static [TokenomicsAllocation],
    token_details: &'static [TokenDetail],
    security: &'static [SecurityFeature],
    roadmap: &'static [RoadmapPhase],
    community: &'static [SocialLink],
    footer: &'static [FooterLinkGroup],
}

impl ContentExport {
    fn collect() -> Self {
        Self {
            brand: content::BRAND,
            tagline: content::TAGLINE,
            nav: &content::NAV_ITEMS,
            hero_stats: &content::HERO_STATS,
            value_features: &content::VALUE_FEATURES,
            utilities: &content::UTILITY_FEATURES,
            allocations: &content::ALLOCATIONS,
            token_details: &content::TOKEN_DETAILS,
            security: &content::SECURITY_FEATURES,
            roadmap: &content::ROADMAP_PHASES,
            community: &content::SOCIAL_LINKS,
            footer: &content::FOOTER_LINKS,
        }
    }
}

pub fn content(json: bool) -> Result<ExitCode> {
    let export = ContentExport::collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &export).context("failed to serialize content")?;
        writeln!(out)?;
        return Ok(ExitCode::SUCCESS);
    }

    writeln!(out, "{} - {}", export.brand, export.tagline)?;
    writeln!(out)?;
    writeln!(out, "Navigation:")?;
    for item in export.nav {
        writeln!(out, "  {:<12} {}", item.label, item.href())?;
    }
    writeln!(out, "Allocation:")?;
    for slice in export.allocations {
        writeln!(out, "  {:<20} {:>3}%", slice.label, slice.percentage)?;
    }
    writeln!(out, "Roadmap:")?;
    for phase in export.roadmap {
        writeln!(out, "  {} {:<12} [{}]", phase.phase, phase.title, phase.status.as_str())?;
    }
    writeln!(
        out,
        "Cards: {} utility, {} security, {} community",
        export.utilities.len(),
        export.security.len(),
        export.community.len()
    )?;
    Ok(ExitCode::SUCCESS)
}
