//! Fixed header with section links and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header turns opaque once the page scrolls past the threshold in
//! `util::scroll`. Links scroll smoothly instead of jumping to the fragment,
//! and every navigation closes the mobile menu.

use leptos::prelude::*;

use crate::content::business::BUSINESS;
use crate::content::nav::{NAV_LINKS, SectionId};
use crate::state::nav::NavBarState;
use crate::util::scroll::scroll_to;

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = RwSignal::new(NavBarState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::{current_scroll_y, fragment_section, is_scrolled};

        Effect::new(move || {
            if let Some(section) = fragment_section() {
                scroll_to(section);
            }
            nav.update(|n| n.observe_scroll(current_scroll_y()));
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = current_scroll_y();
            if nav.with_untracked(|n| n.scrolled) != is_scrolled(y) {
                nav.update(|n| n.observe_scroll(y));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let go = move |target: SectionId| {
        nav.update(NavBarState::navigate);
        scroll_to(target);
    };

    let links = move |item_class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let target = link.target;
                view! {
                    <li>
                        <a
                            class=item_class
                            href=target.href()
                            on:click=move |ev| {
                                ev.prevent_default();
                                go(target);
                            }
                        >
                            {link.label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || nav.get().header_class()>
            <nav class="nav-bar__inner" aria-label="Principal">
                <a
                    class="nav-bar__brand"
                    href=SectionId::Inicio.href()
                    on:click=move |ev| {
                        ev.prevent_default();
                        go(SectionId::Inicio);
                    }
                >
                    <span class="nav-bar__logo" aria-hidden="true">"✂"</span>
                    {BUSINESS.name}
                </a>
                <ul class="nav-bar__links">{links("nav-bar__link")}</ul>
                <button
                    class="nav-bar__menu-toggle"
                    type="button"
                    aria-label="Abrir menu"
                    aria-expanded=move || if nav.get().menu_open { "true" } else { "false" }
                    on:click=move |_| nav.update(NavBarState::toggle_menu)
                >
                    {move || if nav.get().menu_open { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || nav.get().menu_open>
                <ul class="nav-bar__mobile-menu">{links("nav-bar__mobile-link")}</ul>
            </Show>
        </header>
    }
}
