//! The single landing page: sections in fixed order.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::location_panel::LocationPanel;
use crate::components::nav_bar::NavBar;
use crate::components::services_list::ServicesList;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="page">
            <Hero/>
            <ServicesList/>
            <LocationPanel/>
            <ContactForm/>
        </main>
        <Footer/>
    }
}
