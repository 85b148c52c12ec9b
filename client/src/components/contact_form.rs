//! Contact form section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `ContactFormState` in a signal. Native `required`/`type=email`
//! validation blocks the submit event before the handler runs; the handler
//! then drives `begin_submit -> net::contact::submit -> finish_submit`.

use leptos::prelude::*;

use crate::content::business::BUSINESS;
use crate::content::nav::SectionId;
use crate::state::contact::{ContactFormState, FormField};

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = None;
        form.update(|f| match f.begin_submit() {
            Ok(submission) => accepted = Some(submission),
            Err(e) => leptos::logging::warn!("contact form rejected: {e}"),
        });
        let Some(submission) = accepted else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = crate::net::contact::submit(&submission).await;
            form.update(|f| {
                f.finish_submit(&submission, outcome);
            });
        });
    };

    let bind = move |field: FormField| {
        (
            move || form.with(|f| f.field(field).to_owned()),
            move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev))),
        )
    };
    let (name_value, on_name) = bind(FormField::Name);
    let (email_value, on_email) = bind(FormField::Email);
    let (message_value, on_message) = bind(FormField::Message);

    view! {
        <section id=SectionId::Contato.as_str() class="contact">
            <div class="section__header">
                <h2 class="section__title">"Contato"</h2>
                <p class="section__subtitle">
                    "Mande sua mensagem ou ligue para " {BUSINESS.phone} "."
                </p>
            </div>
            <form class="contact-form" on:submit=on_submit>
                <label class="contact-form__field">
                    <span>{FormField::Name.label()}</span>
                    <input
                        type="text"
                        name="name"
                        required
                        autocomplete="name"
                        placeholder="Seu nome"
                        prop:value=name_value
                        on:input=on_name
                    />
                </label>
                <label class="contact-form__field">
                    <span>{FormField::Email.label()}</span>
                    <input
                        type="email"
                        name="email"
                        required
                        autocomplete="email"
                        placeholder="voce@exemplo.com"
                        prop:value=email_value
                        on:input=on_email
                    />
                </label>
                <label class="contact-form__field">
                    <span>{FormField::Message.label()}</span>
                    <textarea
                        name="message"
                        required
                        rows="5"
                        placeholder="Conte o que você precisa"
                        prop:value=message_value
                        on:input=on_message
                    ></textarea>
                </label>
                <button
                    class="btn btn--primary contact-form__submit"
                    type="submit"
                    disabled=move || form.with(ContactFormState::is_submit_disabled)
                >
                    {move || form.with(ContactFormState::submit_label)}
                </button>
                {move || {
                    form.with(|f| f.notice.clone())
                        .map(|notice| {
                            let class = if notice.is_error() {
                                "contact-form__notice contact-form__notice--error"
                            } else {
                                "contact-form__notice"
                            };
                            view! { <p class=class role="status">{notice.message()}</p> }
                        })
                }}
            </form>
        </section>
    }
}
