//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation, site listings, and form feedback. Pages own
//! the state and pass it down as signals and callbacks.

pub mod banner;
pub mod country_select;
pub mod nav_bar;
pub mod popular_countries;
pub mod site_card;
pub mod site_list;
