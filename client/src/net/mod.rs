//! Networking modules for the placement REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the wire schema plus the
//! tolerant parsers that absorb the backend's loose response shapes.

pub mod api;
pub mod types;
