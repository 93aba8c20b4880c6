//! Token facts, allocation legend and the proportional stacked bar.

use leptos::prelude::*;

use crate::content::{ALLOCATIONS, TOKEN_DETAILS};
use crate::types::TokenomicsAllocation;

#[component]
pub fn TokenomicsSection() -> impl IntoView {
    view! {
        <section id="tokenomics" class="section tokenomics">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"A Sustainable Model for Long-Term Growth"</h2>
                </div>

                <div class="tokenomics-grid">
                    <div class="token-details">
                        {TOKEN_DETAILS
                            .iter()
                            .map(|detail| {
                                view! {
                                    <div class="token-detail">
                                        <span class="token-detail-label">{detail.label} ":"</span>
                                        <span class="token-detail-value">{detail.value}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="allocation">
                        <h3 class="allocation-title">"Token Allocation"</h3>
                        <AllocationLegend allocations=&ALLOCATIONS />
                        <AllocationBar allocations=&ALLOCATIONS />
                    </div>
                </div>

                <div class="section-cta tokenomics-cta">
                    <button type="button" class="btn btn-primary">"View Full Tokenomics"</button>
                </div>
            </div>
        </section>
    }
}

/// Legend rows in table order.
#[component]
fn AllocationLegend(allocations: &'static [TokenomicsAllocation]) -> impl IntoView {
    view! {
        <ul class="allocation-legend">
            {allocations
                .iter()
                .map(|item| {
                    view! {
                        <li class="allocation-row" style=item.accent.style()>
                            <span class="allocation-label">
                                <span class="allocation-swatch"></span>
                                {item.label}
                            </span>
                            <span class="allocation-share">{format!("{}%", item.percentage)}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Stacked bar; each segment is as wide as its share of supply.
#[component]
fn AllocationBar(allocations: &'static [TokenomicsAllocation]) -> impl IntoView {
    view! {
        <div class="allocation-bar" role="img" aria-label="Token allocation chart">
            {allocations
                .iter()
                .map(|item| {
                    view! {
                        <div
                            class="allocation-segment"
                            style=segment_style(item)
                            title=format!("{}: {}%", item.label, item.percentage)
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn segment_style(item: &TokenomicsAllocation) -> String {
    format!("width: {}%; {}", item.percentage, item.accent.style())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_width_is_the_percentage() {
        let style = segment_style(&ALLOCATIONS[0]);
        assert_eq!(style, "width: 40%; --accent: var(--e9-violet)");
    }
}
