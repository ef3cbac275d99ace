//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `error` classifies their failures, and `types`
//! defines the JSON shapes crossing the boundary.

pub mod api;
pub mod error;
pub mod types;
