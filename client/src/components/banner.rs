//! Status banner for form feedback.

use leptos::prelude::*;

use crate::state::contact::Banner;

#[component]
pub fn StatusBanner(#[prop(into)] banner: Signal<Option<Banner>>) -> impl IntoView {
    move || {
        banner.get().map(|b| {
            view! {
                <div class=format!("banner {}", b.kind.css_modifier()) role="status">
                    {b.message}
                </div>
            }
        })
    }
}
