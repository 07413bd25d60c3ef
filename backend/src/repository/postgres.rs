//! Postgres-backed company repository

use async_trait::async_trait;
use shared::{Company, CompanyPatch, CompanyType};
use sqlx::PgPool;

use super::{
    build_update_statement, CompanyRepository, RepositoryError, RepositoryResult, SqlValue,
    UpdateStatement,
};

const INSERT_COMPANY: &str = r#"
    INSERT INTO companies (id, name, description, amount_of_employees, registered, type)
    VALUES ($1, $2, $3, $4, $5, $6)
"#;

const GET_COMPANY: &str = r#"
    SELECT id, name, description, amount_of_employees, registered, type
    FROM companies
    WHERE id = $1
"#;

const DELETE_COMPANY: &str = "DELETE FROM companies WHERE id = $1";
const COMPANY_EXISTS_BY_NAME: &str = "SELECT EXISTS(SELECT 1 FROM companies WHERE name = $1)";
const COMPANY_EXISTS_BY_ID: &str = "SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1)";

type CompanyRow = (String, String, Option<String>, i32, bool, String);

#[derive(Clone)]
pub struct PgCompanyRepository {
    db: PgPool,
}

impl PgCompanyRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn company_from_row(row: CompanyRow) -> RepositoryResult<Company> {
        let company_type = CompanyType::parse(&row.5)
            .ok_or_else(|| RepositoryError::InvalidRow(format!("unknown company type {:?}", row.5)))?;

        Ok(Company {
            id: row.0,
            name: row.1,
            description: row.2,
            amount_of_employees: row.3,
            registered: row.4,
            company_type,
        })
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn insert(&self, company: &Company) -> RepositoryResult<()> {
        sqlx::query(INSERT_COMPANY)
            .bind(&company.id)
            .bind(&company.name)
            .bind(&company.description)
            .bind(company.amount_of_employees)
            .bind(company.registered)
            .bind(company.company_type.as_str())
            .execute(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(company_id = %company.id, error = %e, "repository: insert failed");
                e
            })?;

        tracing::debug!(company_id = %company.id, "repository: created company");
        Ok(())
    }

    async fn fetch_by_id(&self, id: &str) -> RepositoryResult<Company> {
        let row = sqlx::query_as::<_, CompanyRow>(GET_COMPANY)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(company_id = %id, error = %e, "repository: fetch failed");
                e
            })?;

        match row {
            Some(row) => {
                tracing::debug!(company_id = %id, "repository: found company");
                Self::company_from_row(row)
            }
            None => {
                tracing::debug!(company_id = %id, "repository: no rows found");
                Err(RepositoryError::NotFound)
            }
        }
    }

    async fn delete_by_id(&self, id: &str) -> RepositoryResult<()> {
        let result = sqlx::query(DELETE_COMPANY)
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(company_id = %id, error = %e, "repository: delete failed");
                e
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(company_id = %id, "repository: deleted company");
        Ok(())
    }

    async fn exists_by_name(&self, name: &str) -> RepositoryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(COMPANY_EXISTS_BY_NAME)
            .bind(name)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(name = %name, error = %e, "repository: name check failed");
                e
            })?;

        Ok(exists)
    }

    async fn exists_by_id(&self, id: &str) -> RepositoryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(COMPANY_EXISTS_BY_ID)
            .bind(id)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(company_id = %id, error = %e, "repository: id check failed");
                e
            })?;

        Ok(exists)
    }

    async fn update(&self, id: &str, patch: &CompanyPatch) -> RepositoryResult<()> {
        let UpdateStatement { sql, values } = build_update_statement(id, patch)?;

        let mut query = sqlx::query(&sql);
        for value in values {
            query = match value {
                SqlValue::Text(v) => query.bind(v),
                SqlValue::Integer(v) => query.bind(v),
                SqlValue::Boolean(v) => query.bind(v),
            };
        }

        let result = query.execute(&self.db).await.map_err(|e| {
            tracing::error!(company_id = %id, error = %e, "repository: update failed");
            e
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(company_id = %id, fields = patch.len(), "repository: updated company");
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
