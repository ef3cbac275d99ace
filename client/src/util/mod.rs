//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and async concerns from page and component
//! logic to improve reuse and testability.

pub mod listing;
pub mod session;
pub mod token_storage;
