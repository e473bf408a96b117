//! Contact form page.
//!
//! A successful send clears the form and shows a success banner for
//! [`SUCCESS_BANNER_SECS`]; failures leave an error banner up until the next
//! submit.

use leptos::prelude::*;

use crate::components::banner::StatusBanner;
use crate::state::contact::{ContactState, SUCCESS_BANNER_SECS};

#[component]
pub fn ContactPage() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        contact.update(|c| payload = c.begin_submit());
        let Some(form) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact(&form).await {
                Ok(()) => {
                    let mut banner_id = 0;
                    contact.update(|c| banner_id = c.on_success());
                    gloo_timers::future::sleep(std::time::Duration::from_secs(SUCCESS_BANNER_SECS)).await;
                    let _ = contact.try_update(|c| c.dismiss(banner_id));
                }
                Err(message) => contact.update(|c| c.on_failure(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, SUCCESS_BANNER_SECS);
            contact.update(|c| c.on_failure(crate::net::api::CONTACT_FAILED_MESSAGE.to_owned()));
        }
    };

    view! {
        <div class="contact-page">
            <h1>"Contact us"</h1>
            <StatusBanner banner=Signal::derive(move || contact.with(|c| c.banner.clone()))/>
            <form class="contact-form" on:submit=on_submit>
                <label class="form-field">
                    <span class="form-field__label">"Name"</span>
                    <input
                        class="form-field__input"
                        type="text"
                        prop:value=move || contact.with(|c| c.form.name.clone())
                        on:input=move |ev| contact.update(|c| c.form.name = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Email"</span>
                    <input
                        class="form-field__input"
                        type="email"
                        prop:value=move || contact.with(|c| c.form.email.clone())
                        on:input=move |ev| contact.update(|c| c.form.email = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Subject"</span>
                    <input
                        class="form-field__input"
                        type="text"
                        prop:value=move || contact.with(|c| c.form.subject.clone())
                        on:input=move |ev| contact.update(|c| c.form.subject = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Message"</span>
                    <textarea
                        class="form-field__input form-field__input--multiline"
                        rows="6"
                        prop:value=move || contact.with(|c| c.form.message.clone())
                        on:input=move |ev| contact.update(|c| c.form.message = event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || contact.with(|c| c.submitting)
                >
                    {move || if contact.with(|c| c.submitting) { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </div>
    }
}
