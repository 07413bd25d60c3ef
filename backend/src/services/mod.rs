//! Business logic services for the Companies API

pub mod auth;
pub mod company;

pub use auth::{Claims, JwtService, LoginService, TokenError};
pub use company::CompanyService;
