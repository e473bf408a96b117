//! Dashboard page: curated job sites, popular countries, and the
//! all-countries toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Curated sites and popular countries are fetched
//! once on mount; the all-countries list is fetched the first time the toggle
//! asks for it. Read failures are logged and leave the lists empty.

use leptos::prelude::*;

use crate::components::popular_countries::PopularCountries;
use crate::components::site_list::SiteList;
use crate::state::dashboard::DashboardState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState {
        curated_loading: true,
        ..DashboardState::default()
    });
    let popular = Signal::derive(move || state.with(|s| s.popular.clone()));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_dashboard_sites().await {
                Ok(sites) => state.update(|s| s.set_curated(sites)),
                Err(e) => {
                    log::warn!("dashboard sites fetch failed: {e}");
                    state.update(|s| s.set_curated(Vec::new()));
                }
            }
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_popular_countries().await {
                Ok(countries) => state.update(|s| s.popular = countries),
                Err(e) => log::warn!("popular countries fetch failed: {e}"),
            }
        });
    }

    let on_toggle = move |_| {
        let mut needs_fetch = false;
        state.update(|s| needs_fetch = s.toggle_scope());
        if needs_fetch {
            load_all_sites(state);
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Your job sites"</h1>
                <button class="btn dashboard-page__toggle" type="button" on:click=on_toggle>
                    {move || state.with(DashboardState::toggle_label)}
                </button>
            </header>
            <div class="dashboard-page__grid">
                <SiteList
                    sites=Signal::derive(move || state.with(|s| s.visible_sites().to_vec()))
                    status=Signal::derive(move || state.with(DashboardState::status))
                />
                <PopularCountries countries=popular/>
            </div>
        </div>
    }
}

fn load_all_sites(state: RwSignal<DashboardState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_job_sites(None).await {
            Ok(sites) => state.update(|s| s.set_all_sites(sites)),
            Err(e) => {
                log::warn!("all-countries sites fetch failed: {e}");
                state.update(DashboardState::all_sites_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    state.update(DashboardState::all_sites_failed);
}
