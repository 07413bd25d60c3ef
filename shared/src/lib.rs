//! Shared types and models for the Companies API
//!
//! This crate holds the company entity, the partial-update field set and the
//! validation rules used by the backend when it accepts requests.

pub mod models;
pub mod patch;
pub mod validation;

pub use models::*;
pub use patch::*;
pub use validation::*;
