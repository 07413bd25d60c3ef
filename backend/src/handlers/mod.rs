//! HTTP handlers

pub mod auth;
pub mod company;
pub mod health;

pub use auth::login;
pub use company::{create_company, delete_company, get_company, update_company};
pub use health::{api_status, health_check};
