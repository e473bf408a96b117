//! Payment step reached after a successful application.

use leptos::prelude::*;

use crate::state::payment::PaymentState;

/// Summarizes the application handed over by the wizard. Visiting directly
/// (or after a reload) shows a prompt to apply first.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let payment = expect_context::<RwSignal<PaymentState>>();

    view! {
        <div class="payment-page">
            <h1>"Payment"</h1>
            <Show
                when=move || payment.with(|p| p.application.is_some())
                fallback=|| {
                    view! {
                        <p class="payment-page__empty">
                            "No application found. "
                            <a href="/apply">"Start an application"</a>
                        </p>
                    }
                }
            >
                {move || {
                    let name = payment.with(PaymentState::applicant_name).unwrap_or_default();
                    payment
                        .with(|p| p.application.clone())
                        .map(|app| {
                            view! {
                                <dl class="payment-summary">
                                    <dt>"Applicant"</dt>
                                    <dd>{name}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{app.email}</dd>
                                    <dt>"Destination"</dt>
                                    <dd>{app.country}</dd>
                                    <dt>"Desired job"</dt>
                                    <dd>{app.desired_job}</dd>
                                    <dt>"Start month"</dt>
                                    <dd>{app.start_month}</dd>
                                </dl>
                            }
                        })
                }}
                <p class="payment-page__note">
                    "Your application has been received. Complete payment to continue."
                </p>
            </Show>
        </div>
    }
}
