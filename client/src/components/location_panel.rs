//! Address, opening hours and the outbound map link.

use leptos::prelude::*;

use crate::content::business::BUSINESS;
use crate::content::nav::SectionId;
use crate::util::map_link::map_search_url;

#[component]
pub fn LocationPanel() -> impl IntoView {
    let map_url = map_search_url(BUSINESS.address);

    view! {
        <section id=SectionId::Localizacao.as_str() class="location">
            <div class="section__header">
                <h2 class="section__title">"Localização"</h2>
                <p class="section__subtitle">"Fácil de chegar, perto do metrô."</p>
            </div>
            <div class="location__panel">
                <div class="location__details">
                    <h3 class="location__label">"Endereço"</h3>
                    <address class="location__address">{BUSINESS.address}</address>

                    <h3 class="location__label">"Horário de funcionamento"</h3>
                    <ul class="location__hours">
                        {BUSINESS
                            .hours
                            .iter()
                            .map(|slot| {
                                view! {
                                    <li>
                                        <span class="location__days">{slot.days}</span>
                                        <span class="location__time">{slot.hours}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <h3 class="location__label">"Telefone"</h3>
                    <p class="location__phone">{BUSINESS.phone}</p>
                </div>
                <div class="location__map-callout">
                    <span class="location__pin" aria-hidden="true">"📍"</span>
                    <p>"Abra o endereço no seu aplicativo de mapas para traçar a rota."</p>
                    <a class="btn btn--primary" href=map_url target="_blank" rel="noopener noreferrer">
                        "Ver no mapa"
                    </a>
                </div>
            </div>
        </section>
    }
}
