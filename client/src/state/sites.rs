//! Job-sites directory state: country selection, fetched sites, search text.
//!
//! DESIGN
//! ======
//! The selected country mirrors the `country` query parameter; the page
//! derives a [`CountrySelection`] from the URL and writes the URL on change,
//! so this state never disagrees with what the address bar shows.
//! Search runs over the already-fetched set without a round-trip.

#[cfg(test)]
#[path = "sites_test.rs"]
mod sites_test;

use crate::net::types::{JobSite, PopularCountry};

/// Select-box value used for "all countries".
pub const ALL_COUNTRIES_VALUE: &str = "all";

/// Which countries the directory is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CountrySelection {
    #[default]
    All,
    Country(String),
}

impl CountrySelection {
    /// Build a selection from the raw `country` query value.
    ///
    /// Absent, blank, or `all` (any case) mean every country.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(v) if v.eq_ignore_ascii_case(ALL_COUNTRIES_VALUE) => Self::All,
            Some(v) => Self::Country(v.to_owned()),
        }
    }

    /// The value to put in the `country` query parameter, if any.
    pub fn query_value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Country(c) => Some(c.as_str()),
        }
    }

    /// The `<select>` value for this selection.
    pub fn select_value(&self) -> &str {
        self.query_value().unwrap_or(ALL_COUNTRIES_VALUE)
    }
}

/// Whether a list is still loading, loaded but empty, or has rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Empty,
    Populated,
}

impl ListStatus {
    pub fn of(loading: bool, len: usize) -> Self {
        if loading {
            Self::Loading
        } else if len == 0 {
            Self::Empty
        } else {
            Self::Populated
        }
    }
}

/// Directory page state.
#[derive(Clone, Debug, Default)]
pub struct SitesState {
    pub selection: CountrySelection,
    pub sites: Vec<JobSite>,
    pub query: String,
    pub loading: bool,
}

impl SitesState {
    /// Switch to `selection`. Returns `true` when it differs from the current
    /// one and a fetch is needed.
    pub fn select(&mut self, selection: CountrySelection) -> bool {
        if self.selection == selection {
            return false;
        }
        self.selection = selection;
        self.loading = true;
        true
    }

    /// Apply a fetch response. Responses land in arrival order, so an older
    /// request finishing late overwrites a newer one.
    pub fn apply_response(&mut self, sites: Vec<JobSite>) {
        self.sites = sites;
        self.loading = false;
    }

    /// Clear the loading flag after a failed fetch, keeping the previous rows.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    pub fn filtered(&self) -> Vec<JobSite> {
        filter_sites(&self.sites, &self.query).into_iter().cloned().collect()
    }

    /// Status of the rows currently shown, i.e. after the search filter.
    pub fn status(&self) -> ListStatus {
        ListStatus::of(self.loading, filter_sites(&self.sites, &self.query).len())
    }
}

/// Case-insensitive substring search over site name, country, and URL.
///
/// A blank query returns every site in its original order. Otherwise the
/// query is matched as typed, surrounding spaces included.
pub fn filter_sites<'a>(sites: &'a [JobSite], query: &str) -> Vec<&'a JobSite> {
    if query.trim().is_empty() {
        return sites.iter().collect();
    }
    let needle = query.to_lowercase();
    sites
        .iter()
        .filter(|site| {
            [&site.site_name, &site.country, &site.url]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Dropdown entries: popular-country names in server rank order, without
/// blanks or repeats.
pub fn country_options(popular: &[PopularCountry]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(popular.len());
    for entry in popular {
        let name = entry.country.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_owned());
        }
    }
    names
}
