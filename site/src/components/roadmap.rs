use leptos::prelude::*;

use crate::content::ROADMAP_PHASES;
use crate::types::RoadmapPhase;

#[component]
pub fn RoadmapSection() -> impl IntoView {
    let last = ROADMAP_PHASES.len().saturating_sub(1);

    view! {
        <section id="roadmap" class="section roadmap">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"From Launch to Growth"</h2>
                </div>

                <div class="roadmap-grid">
                    {ROADMAP_PHASES
                        .iter()
                        .enumerate()
                        .map(|(index, phase)| {
                            view! {
                                <PhaseCard phase={*phase} ordinal={index + 1} connector={index < last} />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="section-cta">
                    <button type="button" class="btn btn-primary">"Follow Updates"</button>
                </div>
            </div>
        </section>
    }
}

/// One phase. The connector to the next card is CSS-hidden on mobile.
#[component]
fn PhaseCard(phase: RoadmapPhase, ordinal: usize, connector: bool) -> impl IntoView {
    view! {
        <div class="roadmap-phase" data-status=phase.status.as_str()>
            {connector.then(|| view! { <div class="roadmap-connector"></div> })}

            <div class="card roadmap-card" style=phase.accent.style()>
                <div class="roadmap-head">
                    <div class="roadmap-ordinal">{ordinal}</div>
                    <div>
                        <div class="roadmap-phase-label">{phase.phase}</div>
                        <div class="roadmap-title">{phase.title}</div>
                    </div>
                </div>

                <ul class="roadmap-items">
                    {phase
                        .items
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="roadmap-item">
                                    <span class="roadmap-bullet"></span>
                                    {*item}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                {phase
                    .status
                    .is_current()
                    .then(|| view! { <div class="roadmap-badge">"In Progress"</div> })}
            </div>
        </div>
    }
}
