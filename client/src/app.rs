//! Document shell and root component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is used by the server to render the full HTML document; `App` is
//! the component both SSR and hydration mount. The site has one real route.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::content::business::BUSINESS;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;

/// HTML document shell rendered by the server around `App`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: meta tags, stylesheet and the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/site.css"/>
        <Title text=page_title()/>
        <Meta name="description" content=BUSINESS.tagline/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}

fn page_title() -> String {
    format!("{} | {}", BUSINESS.name, BUSINESS.city)
}
