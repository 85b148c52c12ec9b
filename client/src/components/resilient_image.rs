//! Remote image that degrades to a placeholder instead of a broken glyph.
//!
//! SYSTEM CONTEXT
//! ==============
//! Service photos are hotlinked from a third-party CDN that may refuse the
//! request at any time (CORS, 404, network). The `<img>` stays mounted while
//! loading so the browser can fetch it; a failure swaps it for a fixed
//! placeholder for good, with no retry.

use leptos::prelude::*;

use crate::state::image::ImageLoadState;

#[component]
pub fn ResilientImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let state = RwSignal::new(ImageLoadState::default());
    let img_ref = NodeRef::<leptos::html::Img>::new();

    // An image that loaded before hydration attached the handlers would
    // otherwise sit in `Loading` forever. Failures are only taken from the
    // `error` event.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(img) = img_ref.get() else {
            return;
        };
        let element = crate::state::image::ImageElementSnapshot {
            complete: img.complete(),
            has_current_src: !img.current_src().is_empty(),
            natural_width: img.natural_width(),
        };
        if state.get_untracked().reconcile(element) != state.get_untracked() {
            state.update(|s| *s = s.reconcile(element));
        }
    });

    let wrapper_class = move || format!("resilient-image {} {class}", state.get().css_modifier());
    let fallback_label = alt.clone();
    let failed_src = src.clone();

    view! {
        <div class=wrapper_class>
            <Show when=move || !state.get().is_terminal()>
                <div class="resilient-image__placeholder" aria-hidden="true">
                    <span class="resilient-image__spinner">"✂"</span>
                </div>
            </Show>
            <Show when=move || state.get() != ImageLoadState::Errored>
                <img
                    node_ref=img_ref
                    class="resilient-image__img"
                    src=src.clone()
                    alt=alt.clone()
                    loading="lazy"
                    on:load=move |_| state.update(|s| *s = s.on_load())
                    on:error={
                        let failed_src = failed_src.clone();
                        move |_| {
                            leptos::logging::debug_warn!("image unavailable, showing placeholder: {failed_src}");
                            state.update(|s| *s = s.on_error());
                        }
                    }
                />
            </Show>
            <Show when=move || state.get() == ImageLoadState::Errored>
                <div class="resilient-image__fallback" role="img" aria-label=fallback_label.clone()>
                    <span class="resilient-image__fallback-icon" aria-hidden="true">"✂"</span>
                    <span class="resilient-image__fallback-text">"Imagem indisponível"</span>
                </div>
            </Show>
        </div>
    }
}
