//! CSS for the landing page.
//!
//! Colors are never written literally here: every rule reads a design token
//! custom property (`var(--e9-*)`, emitted by [`crate::tokens::css_variables`])
//! or the card-local `var(--accent)` set inline from the content tables.
//!
//! # Breakpoints
//!
//! One breakpoint at 768px (matching [`crate::layout::MOBILE_BREAKPOINT`])
//! switches the nav between the inline link list and the collapsed panel,
//! and reveals the roadmap connectors. A second at 1024px widens the grids.

/// Full stylesheet, to be preceded by the token variables.
pub const LANDING_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    background: var(--e9-bg);
    color: var(--e9-white);
    line-height: 1.5;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

button {
    font: inherit;
    cursor: pointer;
}

/* Shell */
.app-shell {
    min-height: 100vh;
    background-color: var(--e9-bg);
}

.container {
    max-width: 1152px;
    margin: 0 auto;
    padding: 0 16px;
}

.section {
    position: relative;
    padding: 80px 16px;
    background-color: var(--e9-bg);
    scroll-margin-top: 64px;
}

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: 36px;
    font-weight: 700;
    margin: 0 0 24px;
    color: var(--e9-white);
}

.section-description {
    font-size: 20px;
    max-width: 768px;
    margin: 0 auto;
    color: var(--e9-silver);
}

.section-cta {
    text-align: center;
}

.gradient-text {
    color: transparent;
    background-image: linear-gradient(45deg, var(--e9-violet), var(--e9-cyan));
    -webkit-background-clip: text;
    background-clip: text;
}

/* Buttons */
.btn {
    display: inline-block;
    padding: 16px 32px;
    border-radius: 8px;
    border: 2px solid transparent;
    font-size: 18px;
    font-weight: 600;
    transition: transform 0.3s, box-shadow 0.3s, background-color 0.3s, color 0.3s;
}

.btn:hover {
    transform: scale(1.05);
}

.btn-primary {
    background-color: var(--e9-violet);
    color: var(--e9-white);
}

.btn-primary:hover {
    box-shadow: 0 10px 15px var(--e9-glow);
}

.btn-secondary {
    background-color: var(--e9-cyan);
    color: var(--e9-bg);
}

.btn-outline {
    background-color: transparent;
    border-color: var(--e9-cyan);
    color: var(--e9-cyan);
}

.btn-outline:hover {
    background-color: var(--e9-cyan);
    color: var(--e9-bg);
}

/* Cards */
.card {
    padding: 24px;
    border: 1px solid var(--accent, var(--e9-violet));
    border-radius: 12px;
    background-color: var(--e9-surface);
    backdrop-filter: blur(10px);
    transition: transform 0.3s, box-shadow 0.3s;
}

.card:hover {
    transform: scale(1.05);
}

.card-icon {
    font-size: 36px;
    margin-bottom: 16px;
}

.card-title {
    font-size: 20px;
    font-weight: 700;
    margin: 0 0 12px;
    color: var(--e9-white);
}

.card:hover .card-title {
    color: transparent;
    background-image: linear-gradient(45deg, var(--accent, var(--e9-violet)), var(--e9-white));
    -webkit-background-clip: text;
    background-clip: text;
}

.card-text {
    margin: 0;
    color: var(--e9-silver);
}

/* Navigation */
.nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    backdrop-filter: blur(12px);
    background-color: var(--e9-nav-bg);
    border-bottom: 1px solid var(--e9-hairline);
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 64px;
}

.nav-brand {
    font-size: 24px;
    font-weight: 700;
    color: var(--e9-white);
}

.nav-links,
.nav-cta {
    display: none;
}

.nav-link {
    padding: 8px 12px;
    font-size: 14px;
    font-weight: 500;
    color: var(--e9-white);
    transition: color 0.3s;
}

.nav-link:hover {
    color: transparent;
    background-image: linear-gradient(45deg, var(--e9-violet), var(--e9-cyan));
    -webkit-background-clip: text;
    background-clip: text;
}

.nav-cta button,
.nav-mobile-cta {
    padding: 8px 24px;
    border: none;
    border-radius: 8px;
    font-size: 14px;
    font-weight: 600;
    background-color: var(--e9-violet);
    color: var(--e9-white);
}

.nav-menu-button {
    background: none;
    border: none;
    color: var(--e9-white);
}

.nav-menu-button svg {
    width: 24px;
    height: 24px;
}

.nav-mobile {
    padding: 8px 8px 12px;
}

.nav-mobile-link {
    display: block;
    padding: 8px 12px;
    font-size: 16px;
    font-weight: 500;
    color: var(--e9-white);
}

.nav-mobile-link:hover {
    color: var(--e9-silver);
}

.nav-mobile-cta {
    width: 100%;
    margin-top: 16px;
}

/* Hero */
.hero {
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    overflow: hidden;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    z-index: 0;
}

.hero-backdrop-img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.6;
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background-image: linear-gradient(135deg, var(--e9-badge-fill), transparent, var(--e9-connector));
}

.hero-content {
    position: relative;
    z-index: 10;
    max-width: 1152px;
    margin: 0 auto;
    text-align: center;
}

.hero-title {
    font-size: 48px;
    font-weight: 700;
    line-height: 1.15;
    margin: 0 0 24px;
}

.hero-subtitle {
    font-size: 20px;
    max-width: 768px;
    margin: 0 auto 32px;
    color: var(--e9-silver);
}

.hero-actions {
    display: flex;
    flex-direction: column;
    gap: 16px;
    justify-content: center;
    align-items: center;
}

.hero-stats {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
    max-width: 896px;
    margin: 64px auto 0;
}

.hero-stat-value {
    font-size: 30px;
    font-weight: 700;
    color: var(--accent);
}

.hero-stat-label {
    font-size: 14px;
    color: var(--e9-silver);
}

/* Value proposition */
.value-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

.value-card {
    text-align: center;
}

.value-image {
    width: 80px;
    height: 80px;
    margin: 0 auto 24px;
    overflow: hidden;
    border: 2px solid var(--e9-violet);
    border-radius: 50%;
    box-shadow: 0 0 20px var(--e9-glow);
    transition: transform 0.3s;
}

.value-card:hover .value-image {
    transform: scale(1.1);
}

.value-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.value-title {
    font-size: 24px;
    font-weight: 700;
    margin: 0 0 16px;
}

.value-description {
    font-size: 18px;
    margin: 0;
    color: var(--e9-silver);
}

/* Utility */
.utility-backdrop {
    position: absolute;
    inset: 0;
    opacity: 0.1;
}

.utility-backdrop img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.utility-body {
    position: relative;
    z-index: 10;
}

.utility-grid,
.security-grid,
.community-grid,
.roadmap-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
    margin-bottom: 48px;
}

.security-card,
.social-card {
    text-align: center;
}

.social-handle {
    font-size: 18px;
    font-weight: 600;
    margin-bottom: 8px;
    color: var(--accent);
}

/* Tokenomics */
.tokenomics-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px;
    align-items: center;
}

.token-details {
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.token-detail {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px;
    border: 1px solid var(--e9-violet);
    border-radius: 8px;
    background-color: var(--e9-surface);
}

.token-detail-label {
    font-weight: 600;
}

.token-detail-value {
    color: var(--e9-silver);
}

.allocation-title {
    font-size: 24px;
    font-weight: 700;
    text-align: center;
    margin: 0 0 24px;
}

.allocation-legend {
    display: flex;
    flex-direction: column;
    gap: 16px;
    margin: 0;
    padding: 0;
    list-style: none;
}

.allocation-row {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.allocation-swatch {
    display: inline-block;
    width: 16px;
    height: 16px;
    margin-right: 12px;
    border-radius: 50%;
    background-color: var(--accent);
}

.allocation-share {
    font-weight: 700;
    color: var(--accent);
}

.allocation-bar {
    display: flex;
    height: 32px;
    margin-top: 32px;
    overflow: hidden;
    border-radius: 8px;
    background-color: var(--e9-track);
}

.allocation-segment {
    height: 100%;
    background-color: var(--accent);
    transition: opacity 0.5s;
}

.allocation-segment:hover {
    opacity: 0.8;
}

.tokenomics-cta {
    margin-top: 48px;
}

/* Roadmap */
.roadmap-phase {
    position: relative;
}

.roadmap-connector {
    display: none;
    position: absolute;
    top: 32px;
    left: 100%;
    width: 100%;
    height: 2px;
    z-index: 0;
    background-color: var(--e9-connector);
    transform: translateX(-50%);
}

.roadmap-card {
    position: relative;
    z-index: 10;
}

.roadmap-head {
    display: flex;
    align-items: center;
    margin-bottom: 16px;
}

.roadmap-ordinal {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 48px;
    height: 48px;
    margin-right: 16px;
    border-radius: 50%;
    font-weight: 700;
    background-color: var(--accent);
}

.roadmap-phase-label {
    font-size: 14px;
    font-weight: 600;
    color: var(--accent);
}

.roadmap-title {
    font-size: 20px;
    font-weight: 700;
}

.roadmap-items {
    margin: 0;
    padding: 0;
    list-style: none;
}

.roadmap-item {
    display: flex;
    align-items: center;
    margin-bottom: 8px;
    font-size: 14px;
    color: var(--e9-silver);
}

.roadmap-bullet {
    width: 8px;
    height: 8px;
    margin-right: 12px;
    border-radius: 50%;
    background-color: var(--accent);
}

.roadmap-badge {
    display: inline-block;
    margin-top: 16px;
    padding: 4px 12px;
    border-radius: 9999px;
    font-size: 12px;
    font-weight: 600;
    background-color: var(--e9-badge-fill);
    color: var(--e9-violet);
}

/* Community */
.community-cta {
    padding: 48px;
    text-align: center;
}

.community-cta-title {
    font-size: 30px;
    font-weight: 700;
    margin: 0 0 16px;
}

.community-cta-text {
    font-size: 20px;
    max-width: 672px;
    margin: 0 auto 32px;
    color: var(--e9-silver);
}

/* Footer */
.footer {
    padding: 64px 16px;
    border-top: 1px solid var(--e9-hairline);
    background-color: var(--e9-bg);
}

.footer-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

.footer-brand-name {
    font-size: 24px;
    font-weight: 700;
    margin-bottom: 16px;
}

.footer-tagline,
.footer-chain,
.footer-link,
.footer-copyright,
.footer-risk {
    color: var(--e9-silver);
}

.footer-tagline {
    font-size: 14px;
    margin: 0 0 16px;
}

.footer-chain,
.footer-risk {
    font-size: 12px;
}

.footer-heading {
    font-weight: 600;
    margin: 0 0 16px;
}

.footer-links {
    margin: 0;
    padding: 0;
    list-style: none;
}

.footer-links li {
    margin-bottom: 8px;
}

.footer-link {
    font-size: 14px;
    transition: color 0.3s;
}

.footer-link:hover {
    color: var(--e9-white);
}

.footer-bottom {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    align-items: center;
    gap: 16px;
    margin-top: 48px;
    padding-top: 32px;
    border-top: 1px solid var(--e9-hairline);
}

.footer-copyright {
    font-size: 14px;
}

.footer-risk {
    max-width: 448px;
    text-align: center;
}

@media (min-width: 768px) {
    .nav-links {
        display: flex;
        align-items: baseline;
        gap: 32px;
        margin-left: 40px;
    }

    .nav-cta {
        display: block;
    }

    .nav-menu-button,
    .nav-mobile {
        display: none;
    }

    .section-title {
        font-size: 48px;
    }

    .hero-title {
        font-size: 72px;
    }

    .hero-subtitle {
        font-size: 24px;
    }

    .hero-actions {
        flex-direction: row;
    }

    .hero-stats,
    .value-grid,
    .community-grid,
    .roadmap-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .utility-grid,
    .security-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .roadmap-connector {
        display: block;
    }

    .community-cta-title {
        font-size: 36px;
    }

    .footer-grid {
        grid-template-columns: repeat(5, 1fr);
    }

    .footer-bottom {
        flex-direction: row;
    }

    .footer-risk {
        text-align: right;
    }
}

@media (min-width: 1024px) {
    .container {
        padding: 0 32px;
    }

    .utility-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .security-grid {
        grid-template-columns: repeat(5, 1fr);
        gap: 24px;
    }

    .tokenomics-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}
"#;

/// Content-Security-Policy for the prerendered page.
///
/// Images come from the CDN; the wasm bundle (when present) is same-origin.
pub const CSP: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'wasm-unsafe-eval'; connect-src 'self'; font-src 'self' data:;";

/// Token variables followed by the landing rules.
pub fn stylesheet() -> String {
    format!("{}\n{}", crate::tokens::css_variables(), LANDING_CSS)
}
