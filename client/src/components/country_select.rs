//! Country dropdown for the job-site directory.

use leptos::prelude::*;

use crate::state::sites::{ALL_COUNTRIES_VALUE, CountrySelection};

/// Dropdown with an "All countries" entry followed by `options`.
///
/// A selected country missing from `options` (e.g. from a shared link) is
/// appended so the control still reflects the URL.
#[component]
pub fn CountrySelect(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<CountrySelection>,
    on_change: Callback<CountrySelection>,
) -> impl IntoView {
    let entries = move || {
        let mut list = options.get();
        if let Some(current) = selected.get().query_value() {
            if !list.iter().any(|c| c == current) {
                list.push(current.to_owned());
            }
        }
        list
    };

    view! {
        <label class="country-select">
            <span class="country-select__label">"Country"</span>
            <select
                class="country-select__input"
                prop:value=move || selected.get().select_value().to_owned()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    on_change.run(CountrySelection::from_query(Some(&value)));
                }
            >
                <option value=ALL_COUNTRIES_VALUE selected=move || selected.get() == CountrySelection::All>
                    "All countries"
                </option>
                {move || {
                    let current = selected.get();
                    entries()
                        .into_iter()
                        .map(|country| {
                            let is_selected = current.query_value() == Some(country.as_str());
                            view! {
                                <option value=country.clone() selected=is_selected>
                                    {country.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
