//! Domain models for the Companies API

mod company;

pub use company::*;
