use leptos::prelude::*;

use crate::content::{BRAND, FOOTER_LINKS, TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-brand-name">{BRAND}</div>
                        <p class="footer-tagline">{TAGLINE}</p>
                        <div class="footer-chain">"Utility token on Solana"</div>
                    </div>

                    {FOOTER_LINKS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="footer-group">
                                    <h4 class="footer-heading">{group.category}</h4>
                                    <ul class="footer-links">
                                        {group
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href="#" class="footer-link">{*link}</a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-bottom">
                    <div class="footer-copyright">"© 2024 E9TH. All rights reserved."</div>
                    <div class="footer-risk">
                        <strong>"Risk Notice:"</strong>
                        " Cryptocurrency investments carry significant risk. "
                        "Past performance does not guarantee future results. Please invest responsibly."
                    </div>
                </div>
            </div>
        </footer>
    }
}
