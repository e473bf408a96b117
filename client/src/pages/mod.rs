//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and fetch orchestration and delegates
//! rendering details to `components`.

pub mod apply;
pub mod contact;
pub mod dashboard;
pub mod payment;
pub mod sites;
