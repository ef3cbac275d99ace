//! Page modules, one per feature area.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its listing/form state and delegates shared chrome
//! (banners, filters, inputs) to `components`. The `form` and `options`
//! modules hold the parsing helpers and choice lists the pages share.

pub mod auth;
pub mod civic;
pub mod education;
pub mod form;
pub mod funding;
pub mod home;
pub mod jobs;
pub mod options;
pub mod organization;
pub mod people;
pub mod profile;
