//! Company business rules: name uniqueness on create, existence on update/delete,
//! and a canonical re-fetch after every mutation.
//!
//! Existence checks and the mutation that follows them are separate statements;
//! two concurrent requests can both pass a check before either writes.

use std::sync::Arc;

use shared::{Company, CompanyPatch};

use crate::error::{AppError, AppResult};
use crate::repository::{CompanyRepository, RepositoryError};

#[derive(Clone)]
pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self {
        Self { repo }
    }

    /// Insert a company whose name is not yet taken and return the stored row
    pub async fn create_company(&self, company: Company) -> AppResult<Company> {
        let name_exists = self.repo.exists_by_name(&company.name).await.map_err(|e| {
            tracing::error!(name = %company.name, error = %e, "service: create_company name check failed");
            AppError::InternalServerError
        })?;

        if name_exists {
            return Err(AppError::RecordAlreadyExistsForGivenName);
        }

        self.repo.insert(&company).await.map_err(|e| {
            tracing::error!(name = %company.name, error = %e, "service: create_company insert failed");
            AppError::UnableToCreateCompany
        })?;

        let created = self.repo.fetch_by_id(&company.id).await.map_err(|e| {
            tracing::error!(company_id = %company.id, error = %e, "service: create_company re-fetch failed");
            AppError::InternalServerError
        })?;

        tracing::debug!(company_id = %created.id, "service: created company");
        Ok(created)
    }

    pub async fn get_company(&self, id: &str) -> AppResult<Company> {
        let company = self.repo.fetch_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                tracing::debug!(company_id = %id, "service: get_company found nothing");
                AppError::NoCompanyRecordsFoundById
            }
            e => {
                tracing::error!(company_id = %id, error = %e, "service: get_company failed");
                AppError::UnableToFetchCompany
            }
        })?;

        tracing::debug!(company_id = %id, "service: fetched company");
        Ok(company)
    }

    pub async fn delete_company(&self, id: &str) -> AppResult<()> {
        self.ensure_exists(id).await?;

        self.repo.delete_by_id(id).await.map_err(|e| {
            tracing::error!(company_id = %id, error = %e, "service: delete_company failed");
            AppError::UnableToDeleteCompany
        })?;

        tracing::debug!(company_id = %id, "service: deleted company");
        Ok(())
    }

    /// Apply a partial update and return the stored row afterwards
    pub async fn update_company(&self, id: &str, patch: &CompanyPatch) -> AppResult<Company> {
        self.ensure_exists(id).await?;

        self.repo.update(id, patch).await.map_err(|e| {
            tracing::error!(company_id = %id, error = %e, "service: update_company failed");
            match e {
                RepositoryError::EmptyUpdate => AppError::BadRequest,
                _ => AppError::UnableToUpdateCompany,
            }
        })?;

        let company = self.repo.fetch_by_id(id).await.map_err(|e| {
            tracing::error!(company_id = %id, error = %e, "service: update_company re-fetch failed");
            AppError::InternalServerError
        })?;

        tracing::debug!(company_id = %id, "service: updated company");
        Ok(company)
    }

    /// Store connectivity, for health checks
    pub async fn is_store_reachable(&self) -> bool {
        self.repo.ping().await.is_ok()
    }

    async fn ensure_exists(&self, id: &str) -> AppResult<()> {
        let exists = self.repo.exists_by_id(id).await.map_err(|e| {
            tracing::error!(company_id = %id, error = %e, "service: existence check failed");
            AppError::InternalServerError
        })?;

        if !exists {
            return Err(AppError::NoCompanyRecordsFoundById);
        }

        Ok(())
    }
}
