//! Loading / empty / populated rendering for a list of job sites.

use leptos::prelude::*;

use crate::components::site_card::SiteCard;
use crate::net::types::JobSite;
use crate::state::sites::ListStatus;

#[component]
pub fn SiteList(
    #[prop(into)] sites: Signal<Vec<JobSite>>,
    #[prop(into)] status: Signal<ListStatus>,
    #[prop(default = "No job sites found.")] empty_text: &'static str,
) -> impl IntoView {
    move || match status.get() {
        ListStatus::Loading => view! { <p class="site-list__status">"Loading sites..."</p> }.into_any(),
        ListStatus::Empty => view! { <p class="site-list__status">{empty_text}</p> }.into_any(),
        ListStatus::Populated => view! {
            <div class="site-list">
                {sites
                    .get()
                    .into_iter()
                    .map(|site| view! { <SiteCard site=site/> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
