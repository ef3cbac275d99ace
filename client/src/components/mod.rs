//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, list banners, filters,
//! progress) while reading/writing state from Leptos context providers.

pub mod coming_soon;
pub mod field;
pub mod filter_bar;
pub mod header;
pub mod list_status;
pub mod progress_bar;
