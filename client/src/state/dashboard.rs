//! Dashboard state: curated sites, popular countries, and the scope toggle.
//!
//! DESIGN
//! ======
//! The curated list and the all-countries list live in separate slots so the
//! toggle only changes which one is shown. Flipping back to curated never
//! needs a refetch, and flipping twice always lands on the original list.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::sites::ListStatus;
use crate::net::types::{JobSite, PopularCountry};

/// Which set of sites the dashboard is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SiteScope {
    /// Sites the backend curated for the user's destination country.
    #[default]
    Curated,
    /// Every site, unfiltered.
    AllCountries,
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub scope: SiteScope,
    pub curated: Vec<JobSite>,
    /// `None` until the all-countries list has been fetched once.
    pub all_sites: Option<Vec<JobSite>>,
    pub popular: Vec<PopularCountry>,
    pub curated_loading: bool,
    pub all_loading: bool,
}

impl DashboardState {
    /// Flip the scope. Returns `true` when the all-countries list is now shown
    /// but has not been fetched yet.
    pub fn toggle_scope(&mut self) -> bool {
        self.scope = match self.scope {
            SiteScope::Curated => SiteScope::AllCountries,
            SiteScope::AllCountries => SiteScope::Curated,
        };
        let needs_fetch =
            self.scope == SiteScope::AllCountries && self.all_sites.is_none() && !self.all_loading;
        if needs_fetch {
            self.all_loading = true;
        }
        needs_fetch
    }

    pub fn set_curated(&mut self, sites: Vec<JobSite>) {
        self.curated = sites;
        self.curated_loading = false;
    }

    pub fn set_all_sites(&mut self, sites: Vec<JobSite>) {
        self.all_sites = Some(sites);
        self.all_loading = false;
    }

    /// Clear the all-countries loading flag after a failed fetch so the next
    /// toggle tries again.
    pub fn all_sites_failed(&mut self) {
        self.all_loading = false;
    }

    pub fn visible_sites(&self) -> &[JobSite] {
        match self.scope {
            SiteScope::Curated => &self.curated,
            SiteScope::AllCountries => self.all_sites.as_deref().unwrap_or(&[]),
        }
    }

    pub fn status(&self) -> ListStatus {
        let loading = match self.scope {
            SiteScope::Curated => self.curated_loading,
            SiteScope::AllCountries => self.all_loading,
        };
        ListStatus::of(loading, self.visible_sites().len())
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.scope {
            SiteScope::Curated => "View all countries",
            SiteScope::AllCountries => "View my sites",
        }
    }
}
