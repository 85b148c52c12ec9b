//! Fallback for any path other than `/`.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"Página não encontrada"</h1>
            <a class="btn btn--primary" href="/">"Voltar para o início"</a>
        </main>
    }
}
