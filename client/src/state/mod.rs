//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`dashboard`, `sites`, `wizard`, `contact`) so pages
//! drive small focused models and the transition rules stay testable without
//! a browser.

pub mod contact;
pub mod dashboard;
pub mod payment;
pub mod sites;
pub mod wizard;
