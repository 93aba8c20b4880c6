//! Page shell composing every section in fixed order.

use leptos::prelude::*;

use super::{
    CommunitySection, Footer, HeroSection, Navigation, RoadmapSection, SecuritySection,
    TokenomicsSection, UtilitySection, ValueProposition,
};
use crate::layout::LayoutContext;

/// Navigation, the seven content sections, then the footer.
///
/// `layout` is read but does not change the composition; its values are
/// exposed on the shell as `data-sidebar` and `data-viewport`.
#[component]
pub fn AppLayout(#[prop(into)] layout: Signal<LayoutContext>) -> impl IntoView {
    view! {
        <div
            class="app-shell"
            data-sidebar=move || layout.get().sidebar_attr()
            data-viewport=move || layout.get().viewport.as_str()
        >
            <Navigation />
            <main>
                <HeroSection />
                <ValueProposition />
                <UtilitySection />
                <TokenomicsSection />
                <SecuritySection />
                <RoadmapSection />
                <CommunitySection />
            </main>
            <Footer />
        </div>
    }
}
