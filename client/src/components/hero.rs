//! Opening banner with the main calls to action.

use leptos::prelude::*;

use crate::content::business::BUSINESS;
use crate::content::nav::SectionId;
use crate::util::scroll::scroll_to;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SectionId::Inicio.as_str() class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <p class="hero__eyebrow">"Barbearia em " {BUSINESS.city}</p>
                <h1 class="hero__title">{BUSINESS.name}</h1>
                <p class="hero__tagline">{BUSINESS.tagline}</p>
                <div class="hero__actions">
                    <button class="btn btn--primary" type="button" on:click=move |_| scroll_to(SectionId::Contato)>
                        "Agendar horário"
                    </button>
                    <button class="btn btn--ghost" type="button" on:click=move |_| scroll_to(SectionId::Servicos)>
                        "Ver serviços"
                    </button>
                </div>
            </div>
        </section>
    }
}
