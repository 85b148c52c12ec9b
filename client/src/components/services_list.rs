//! Price list, one card per service.

use leptos::prelude::*;

use crate::components::resilient_image::ResilientImage;
use crate::content::nav::SectionId;
use crate::content::services::{SERVICES, Service};

#[component]
pub fn ServicesList() -> impl IntoView {
    view! {
        <section id=SectionId::Servicos.as_str() class="services">
            <div class="section__header">
                <h2 class="section__title">"Serviços"</h2>
                <p class="section__subtitle">"Preços fixos, sem surpresa no final."</p>
            </div>
            <div class="services__grid">
                {SERVICES.iter().map(|service| view! { <ServiceCard service=*service/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let card_class = if service.popular { "service-card service-card--popular" } else { "service-card" };

    view! {
        <article class=card_class data-service=service.id>
            <ResilientImage src=service.image_url alt=service.name class="service-card__image"/>
            <div class="service-card__body">
                <Show when=move || service.popular>
                    <span class="service-card__badge">"Mais popular"</span>
                </Show>
                <header class="service-card__header">
                    <h3 class="service-card__name">{service.name}</h3>
                    <span class="service-card__price">{service.price}</span>
                </header>
                <p class="service-card__description">{service.description}</p>
            </div>
        </article>
    }
}
