//! In-process company repository

use std::collections::HashMap;

use async_trait::async_trait;
use shared::{Company, CompanyPatch};
use tokio::sync::RwLock;

use super::{CompanyRepository, RepositoryError, RepositoryResult};

/// Company store held in memory. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: RwLock<HashMap<String, Company>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.companies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.companies.read().await.is_empty()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn insert(&self, company: &Company) -> RepositoryResult<()> {
        let mut companies = self.companies.write().await;
        if companies.contains_key(&company.id) {
            return Err(RepositoryError::Conflict(company.id.clone()));
        }
        companies.insert(company.id.clone(), company.clone());

        tracing::debug!(company_id = %company.id, "repository: created company");
        Ok(())
    }

    async fn fetch_by_id(&self, id: &str) -> RepositoryResult<Company> {
        self.companies
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete_by_id(&self, id: &str) -> RepositoryResult<()> {
        match self.companies.write().await.remove(id) {
            Some(_) => {
                tracing::debug!(company_id = %id, "repository: deleted company");
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn exists_by_name(&self, name: &str) -> RepositoryResult<bool> {
        Ok(self
            .companies
            .read()
            .await
            .values()
            .any(|c| c.name == name))
    }

    async fn exists_by_id(&self, id: &str) -> RepositoryResult<bool> {
        Ok(self.companies.read().await.contains_key(id))
    }

    async fn update(&self, id: &str, patch: &CompanyPatch) -> RepositoryResult<()> {
        if patch.is_empty() {
            return Err(RepositoryError::EmptyUpdate);
        }

        let mut companies = self.companies.write().await;
        let company = companies.get_mut(id).ok_or(RepositoryError::NotFound)?;
        patch.apply_to(company);

        tracing::debug!(company_id = %id, fields = patch.len(), "repository: updated company");
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
