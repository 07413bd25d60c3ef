//! Persistence gateway for company records
//!
//! The rule engine talks to storage only through [`CompanyRepository`]. Two
//! implementations exist: Postgres for deployments and an in-process map for
//! local runs and tests.

use async_trait::async_trait;
use shared::{Company, CompanyPatch};
use thiserror::Error;

pub mod memory;
pub mod postgres;
pub mod statement;

pub use memory::InMemoryCompanyRepository;
pub use postgres::PgCompanyRepository;
pub use statement::{build_update_statement, SqlValue, UpdateStatement};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no company found")]
    NotFound,

    #[error("update requires at least one field")]
    EmptyUpdate,

    #[error("company {0} already exists")]
    Conflict(String),

    #[error("invalid row: {0}")]
    InvalidRow(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage operations for companies
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Plain insert of all six columns. Carries no uniqueness check on `name`.
    async fn insert(&self, company: &Company) -> RepositoryResult<()>;

    /// Fails with [`RepositoryError::NotFound`] when no row matches.
    async fn fetch_by_id(&self, id: &str) -> RepositoryResult<Company>;

    /// Fails with [`RepositoryError::NotFound`] when no row was deleted.
    async fn delete_by_id(&self, id: &str) -> RepositoryResult<()>;

    async fn exists_by_name(&self, name: &str) -> RepositoryResult<bool>;

    async fn exists_by_id(&self, id: &str) -> RepositoryResult<bool>;

    /// Write the patched columns of one company
    async fn update(&self, id: &str, patch: &CompanyPatch) -> RepositoryResult<()>;

    /// Connectivity probe for health checks
    async fn ping(&self) -> RepositoryResult<()>;
}
