use leptos::prelude::*;

use crate::content::{BRAND, HERO_BACKGROUND, HERO_STATS};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="hero" class="section hero">
            <div class="hero-backdrop">
                <img src=HERO_BACKGROUND alt="E9TH Hero Background" class="hero-backdrop-img" />
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <h1 class="hero-title">
                    {BRAND}
                    " — where utility comes "
                    <span class="gradient-text">"full circle"</span>
                </h1>
                <p class="hero-subtitle">
                    "Unlock discounts, early access, and exclusive products on Solana."
                </p>

                <div class="hero-actions">
                    <button type="button" class="btn btn-primary">"Launch App"</button>
                    <a href="#litepaper" class="btn btn-outline">"Read Litepaper"</a>
                </div>

                <div class="hero-stats">
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero-stat" style=stat.accent.style()>
                                    <div class="hero-stat-value">{stat.value}</div>
                                    <div class="hero-stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
