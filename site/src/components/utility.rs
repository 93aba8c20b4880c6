use leptos::prelude::*;

use crate::content::{UTILITY_BACKGROUND, UTILITY_FEATURES};
use crate::types::UtilityFeature;

#[component]
pub fn UtilitySection() -> impl IntoView {
    view! {
        <section id="utility" class="section utility">
            <div class="utility-backdrop">
                <img src=UTILITY_BACKGROUND alt="Solana Network" />
            </div>

            <div class="container utility-body">
                <div class="section-header">
                    <h2 class="section-title">"Hold E9TH. Unlock More."</h2>
                </div>

                <div class="utility-grid">
                    {UTILITY_FEATURES
                        .iter()
                        .map(|feature| view! { <UtilityCard feature={*feature} /> })
                        .collect_view()}
                </div>

                <div class="section-cta">
                    <button type="button" class="btn btn-secondary">"Explore Utilities"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn UtilityCard(feature: UtilityFeature) -> impl IntoView {
    view! {
        <div id=feature.anchor class="card utility-card" style=feature.accent.style()>
            <div class="card-icon">{feature.icon}</div>
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-text">{feature.description}</p>
        </div>
    }
}
