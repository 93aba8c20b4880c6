use leptos::prelude::*;

use crate::content::VALUE_FEATURES;

/// "Why E9TH?" overview. Doubles as the `#litepaper` nav target.
#[component]
pub fn ValueProposition() -> impl IntoView {
    view! {
        <section id="litepaper" class="section value">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Why E9TH?"</h2>
                </div>

                <div class="value-grid">
                    {VALUE_FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="value-card">
                                    <div class="value-image">
                                        <img src=feature.image alt=feature.title />
                                    </div>
                                    <h3 class="value-title">{feature.title}</h3>
                                    <p class="value-description">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
