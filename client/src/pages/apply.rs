//! Two-step application wizard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step 1 collects identity and credentials, step 2 the destination. Submit
//! registers the applicant, stores the issued tokens, hands the application
//! (without password) to the payment route, and navigates there.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::payment::PaymentState;
use crate::state::wizard::{GENDER_OPTIONS, WizardField, WizardState, WizardStep};

#[component]
pub fn ApplyPage() -> impl IntoView {
    let wizard = RwSignal::new(WizardState::default());
    let payment = expect_context::<RwSignal<PaymentState>>();
    let navigate = use_navigate();
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            registered.set(false);
            navigate("/payment", NavigateOptions::default());
        }
    });

    let on_next = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        wizard.update(|w| {
            w.advance();
        });
    };

    let on_back = move |_| wizard.update(WizardState::back);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        wizard.update(|w| payload = w.begin_submit());
        let Some(data) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register_user(&data).await {
                Ok(tokens) => {
                    if !crate::util::session::store_tokens(&tokens) {
                        log::warn!("session tokens could not be persisted");
                    }
                    payment.update(|p| p.publish(&data));
                    wizard.update(WizardState::submit_succeeded);
                    registered.set(true);
                }
                Err(message) => wizard.update(|w| w.submit_failed(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (data, payment, registered);
            wizard.update(|w| {
                w.submit_failed(crate::net::api::REGISTER_FAILED_MESSAGE.to_owned());
            });
        }
    };

    let submitting = move || wizard.with(|w| w.submitting);

    view! {
        <div class="apply-page">
            <h1>"Apply"</h1>
            <p class="apply-page__progress">
                {move || format!("Step {} of 2", wizard.with(|w| w.step.number()))}
            </p>
            <Show when=move || wizard.with(|w| w.error.is_some())>
                <p class="form-error" role="alert">
                    {move || wizard.with(|w| w.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show
                when=move || wizard.with(|w| w.step == WizardStep::Identity)
                fallback=move || {
                    view! {
                        <form class="apply-form" on:submit=on_submit>
                            {WizardField::DESTINATION
                                .into_iter()
                                .map(|field| field_input(wizard, field))
                                .collect_view()}
                            <div class="apply-form__actions">
                                <button class="btn" type="button" on:click=on_back>
                                    "Back"
                                </button>
                                <button class="btn btn--primary" type="submit" disabled=submitting>
                                    {move || if submitting() { "Submitting..." } else { "Submit application" }}
                                </button>
                            </div>
                        </form>
                    }
                }
            >
                <form class="apply-form" on:submit=on_next>
                    {WizardField::IDENTITY
                        .into_iter()
                        .map(|field| field_input(wizard, field))
                        .collect_view()}
                    <div class="apply-form__actions">
                        <button class="btn btn--primary" type="submit">
                            "Next"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

fn field_input(wizard: RwSignal<WizardState>, field: WizardField) -> impl IntoView {
    let value = move || wizard.with(|w| field.value(&w.data).to_owned());
    let control = if field == WizardField::Gender {
        view! {
            <select
                class="form-field__input"
                prop:value=value
                on:change=move |ev| wizard.update(|w| field.set(&mut w.data, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {GENDER_OPTIONS
                    .into_iter()
                    .map(|(option, label)| view! { <option value=option>{label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any()
    } else {
        view! {
            <input
                class="form-field__input"
                type=field.input_type()
                prop:value=value
                on:input=move |ev| wizard.update(|w| field.set(&mut w.data, event_target_value(&ev)))
            />
        }
        .into_any()
    };

    view! {
        <label class="form-field">
            <span class="form-field__label">{field.label()}</span>
            {control}
        </label>
    }
}
