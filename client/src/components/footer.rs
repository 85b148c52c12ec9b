//! Page footer with quick links and contact facts.

use leptos::prelude::*;

use crate::content::business::BUSINESS;
use crate::content::nav::NAV_LINKS;
use crate::util::scroll::scroll_to;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <span class="footer__name">{BUSINESS.name}</span>
                    <p class="footer__tagline">{BUSINESS.tagline}</p>
                </div>
                <nav class="footer__links" aria-label="Rodapé">
                    <h4>"Navegação"</h4>
                    <ul>
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let target = link.target;
                                view! {
                                    <li>
                                        <a
                                            href=target.href()
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                scroll_to(target);
                                            }
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="footer__contact">
                    <h4>"Contato"</h4>
                    <p>{BUSINESS.phone}</p>
                    <p>
                        <a href=format!("mailto:{}", BUSINESS.email)>{BUSINESS.email}</a>
                    </p>
                    <p>
                        <a href=BUSINESS.instagram target="_blank" rel="noopener noreferrer">"Instagram"</a>
                    </p>
                </div>
            </div>
            <p class="footer__copyright">"© " {BUSINESS.name} ". Todos os direitos reservados."</p>
        </footer>
    }
}
