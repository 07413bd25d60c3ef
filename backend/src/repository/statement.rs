//! Parameterized UPDATE statement builder

use shared::{CompanyField, CompanyPatch};

use super::RepositoryError;

/// A value bound to one positional parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Integer(i32),
    Boolean(bool),
}

impl From<&CompanyField> for SqlValue {
    fn from(field: &CompanyField) -> Self {
        match field {
            CompanyField::Name(v) | CompanyField::Description(v) => SqlValue::Text(v.clone()),
            CompanyField::AmountOfEmployees(v) => SqlValue::Integer(*v),
            CompanyField::Registered(v) => SqlValue::Boolean(*v),
            CompanyField::Type(v) => SqlValue::Text(v.as_str().to_string()),
        }
    }
}

/// SQL text plus its bind values; `values[i]` binds to `$i+1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// Build `UPDATE companies SET ... WHERE id = $n` for a patch.
///
/// Column names come only from [`CompanyField::column`]. The id is always the last
/// parameter. An empty patch is rejected.
pub fn build_update_statement(
    id: &str,
    patch: &CompanyPatch,
) -> Result<UpdateStatement, RepositoryError> {
    if patch.is_empty() {
        return Err(RepositoryError::EmptyUpdate);
    }

    let mut assignments = Vec::with_capacity(patch.len());
    let mut values = Vec::with_capacity(patch.len() + 1);

    for (i, field) in patch.fields().iter().enumerate() {
        assignments.push(format!("{} = ${}", field.column(), i + 1));
        values.push(SqlValue::from(field));
    }
    values.push(SqlValue::Text(id.to_string()));

    let sql = format!(
        "UPDATE companies SET {} WHERE id = ${}",
        assignments.join(", "),
        values.len()
    );

    Ok(UpdateStatement { sql, values })
}
