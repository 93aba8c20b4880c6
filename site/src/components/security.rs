use leptos::prelude::*;

use crate::content::SECURITY_FEATURES;
use crate::tokens::Accent;

#[component]
pub fn SecuritySection() -> impl IntoView {
    // All security cards share the secondary accent.
    let accent = Accent::Cyan.style();

    view! {
        <section id="security" class="section security">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Security First. Confidence Always."</h2>
                </div>

                <div class="security-grid">
                    {SECURITY_FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card security-card" style=accent.clone()>
                                    <div class="card-icon">{feature.icon}</div>
                                    <h3 class="card-title">{feature.title}</h3>
                                    <p class="card-text">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="section-cta">
                    <button type="button" class="btn btn-secondary">"Read Security Overview"</button>
                </div>
            </div>
        </section>
    }
}
