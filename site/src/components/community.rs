use leptos::prelude::*;

use crate::content::{SOCIAL_LINKS, TAGLINE};

#[component]
pub fn CommunitySection() -> impl IntoView {
    view! {
        <section id="community" class="section community">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Join the Movement"</h2>
                    <p class="section-description">
                        "E9TH is more than a token — it's a gateway to utility on Solana."
                    </p>
                </div>

                <div class="community-grid">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <div class="card social-card" style=link.accent.style()>
                                    <div class="card-icon">{link.icon}</div>
                                    <h3 class="card-title">{link.name}</h3>
                                    <div class="social-handle">{link.handle}</div>
                                    <p class="card-text">{link.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="card community-cta">
                    <h3 class="community-cta-title">"E9TH — " {TAGLINE.to_lowercase()}</h3>
                    <p class="community-cta-text">
                        "Get started today. Buy, hold, and unlock more with every token."
                    </p>
                    <button type="button" class="btn btn-primary">"Launch App"</button>
                </div>
            </div>
        </section>
    }
}
