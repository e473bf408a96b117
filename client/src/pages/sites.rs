//! Job-site directory: country dropdown bound to `?country=` plus text search.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL is the source of truth. The selection is derived from the query on
//! every navigation; picking a country replaces the URL, which re-derives the
//! selection and triggers a fetch. Search filters the fetched rows locally.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::country_select::CountrySelect;
use crate::components::site_list::SiteList;
use crate::net::types::PopularCountry;
use crate::state::sites::{CountrySelection, SitesState, country_options};
use crate::util::query::{COUNTRY_PARAM, is_canonical_country, sites_href};

#[component]
pub fn SitesPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let state = RwSignal::new(SitesState {
        loading: true,
        ..SitesState::default()
    });
    let popular = RwSignal::new(Vec::<PopularCountry>::new());
    let pending_nav = RwSignal::new(None::<CountrySelection>);

    let selection = Memo::new(move |_| {
        CountrySelection::from_query(query.get().get(COUNTRY_PARAM).as_deref())
    });

    // Fetch on mount and whenever the URL selects a different country.
    Effect::new(move |prev: Option<()>| {
        let next = selection.get();
        let mut changed = false;
        state.update(|s| changed = s.select(next.clone()));
        if changed || prev.is_none() {
            load_sites(state, next);
        }
    });

    // A blank, padded, or "ALL" parameter is rewritten to the selection's own href.
    Effect::new(move || {
        let raw = query.with(|q| q.get(COUNTRY_PARAM));
        if !is_canonical_country(raw.as_deref()) {
            pending_nav.set(Some(selection.get_untracked()));
        }
    });

    Effect::new(move || {
        if let Some(next) = pending_nav.get() {
            pending_nav.set(None);
            navigate(
                &sites_href(&next),
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_popular_countries().await {
            Ok(countries) => popular.set(countries),
            Err(e) => log::warn!("popular countries fetch failed: {e}"),
        }
    });

    let on_select = Callback::new(move |next: CountrySelection| {
        if next != selection.get_untracked() {
            pending_nav.set(Some(next));
        }
    });

    let filtered = Signal::derive(move || state.with(SitesState::filtered));
    let status = Signal::derive(move || state.with(SitesState::status));
    let empty_text = move || {
        if state.with(|s| s.query.trim().is_empty()) {
            "No job sites found for this country."
        } else {
            "No sites match your search."
        }
    };

    view! {
        <div class="sites-page">
            <header class="sites-page__header">
                <h1>"Job sites"</h1>
                <CountrySelect
                    options=Signal::derive(move || popular.with(|p| country_options(p)))
                    selected=selection
                    on_change=on_select
                />
                <input
                    class="sites-page__search"
                    type="search"
                    placeholder="Search by name, country, or URL"
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
                />
            </header>
            {move || {
                let empty = empty_text();
                view! { <SiteList sites=filtered status=status empty_text=empty/> }
            }}
        </div>
    }
}

fn load_sites(state: RwSignal<SitesState>, selection: CountrySelection) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_job_sites(selection.query_value()).await {
            Ok(sites) => state.update(|s| s.apply_response(sites)),
            Err(e) => {
                log::warn!("job sites fetch failed: {e}");
                state.update(SitesState::fetch_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selection;
        state.update(SitesState::fetch_failed);
    }
}
