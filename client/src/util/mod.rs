//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clipboard,
//! URL building) from page and component logic.

pub mod clipboard;
pub mod query;
pub mod session;
pub mod storage;
