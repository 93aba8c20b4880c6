//! Fixed header with the nav links, CTA and collapsible mobile panel.

use leptos::prelude::*;

use crate::content::{BRAND, NAV_ITEMS};
use crate::menu::MenuState;

#[component]
pub fn Navigation(
    /// State on mount; the page always starts with `Closed`
    #[prop(default = MenuState::Closed)]
    initial_menu: MenuState,
) -> impl IntoView {
    let menu = RwSignal::new(initial_menu);

    view! {
        <nav class="nav" data-menu=move || if menu.get().is_open() { "open" } else { "closed" }>
            <div class="container">
                <div class="nav-inner">
                    <a href="#hero" class="nav-brand">{BRAND}</a>

                    <div class="nav-links">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! { <a href=item.href() class="nav-link">{item.label}</a> }
                            })
                            .collect_view()}
                    </div>

                    <div class="nav-cta">
                        <button type="button">"Launch App"</button>
                    </div>

                    <button
                        type="button"
                        class="nav-menu-button"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().aria_expanded()
                        on:click=move |_| menu.update(|m| *m = m.toggle())
                    >
                        <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d=move || menu.get().icon_path()
                            ></path>
                        </svg>
                    </button>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div class="nav-mobile">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="nav-mobile-link"
                                        on:click=move |_| menu.update(|m| *m = m.on_link_activated())
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button type="button" class="nav-mobile-cta">"Launch App"</button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
