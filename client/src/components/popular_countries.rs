//! Ranked list of popular destination countries.

use leptos::prelude::*;

use crate::net::types::PopularCountry;
use crate::state::sites::CountrySelection;
use crate::util::query::sites_href;

/// Each entry links to the directory filtered to that country.
#[component]
pub fn PopularCountries(#[prop(into)] countries: Signal<Vec<PopularCountry>>) -> impl IntoView {
    view! {
        <section class="popular-countries">
            <h2>"Popular countries"</h2>
            <Show
                when=move || !countries.get().is_empty()
                fallback=|| view! { <p class="popular-countries__empty">"No data yet."</p> }
            >
                <ol class="popular-countries__list">
                    {move || {
                        countries
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let href = sites_href(&CountrySelection::Country(entry.country.clone()));
                                view! {
                                    <li class="popular-countries__item">
                                        <a href=href>{entry.country}</a>
                                        <span class="popular-countries__count">{entry.count}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </Show>
        </section>
    }
}
