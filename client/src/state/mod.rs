//! Client state stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types with explicit transitions. Components wrap them in
//! `RwSignal`s; `session` and `view` are provided app-wide as context.

pub mod filter;
pub mod listing;
pub mod session;
pub mod view;
