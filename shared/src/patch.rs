//! Partial updates of a company
//!
//! A PATCH body is an open JSON object. It is narrowed here to an ordered list of
//! [`CompanyField`] values, so only known columns can ever reach a statement.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{Company, CompanyType};

/// A new value for one mutable company column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyField {
    Name(String),
    Description(String),
    AmountOfEmployees(i32),
    Registered(bool),
    Type(CompanyType),
}

impl CompanyField {
    /// Column name in the `companies` table
    pub fn column(&self) -> &'static str {
        match self {
            CompanyField::Name(_) => "name",
            CompanyField::Description(_) => "description",
            CompanyField::AmountOfEmployees(_) => "amount_of_employees",
            CompanyField::Registered(_) => "registered",
            CompanyField::Type(_) => "type",
        }
    }

    fn apply_to(&self, company: &mut Company) {
        match self {
            CompanyField::Name(v) => company.name = v.clone(),
            CompanyField::Description(v) => company.description = Some(v.clone()),
            CompanyField::AmountOfEmployees(v) => company.amount_of_employees = *v,
            CompanyField::Registered(v) => company.registered = *v,
            CompanyField::Type(v) => company.company_type = *v,
        }
    }
}

/// Constraints applied to PATCH bodies, built once at startup
#[derive(Debug, Clone)]
pub struct PatchRules {
    pub name_min_length: u64,
    pub name_max_length: u64,
    pub description_max_length: u64,
    /// Keys accepted in a body but never written
    pub passthrough_keys: &'static [&'static str],
}

impl Default for PatchRules {
    fn default() -> Self {
        Self {
            name_min_length: 2,
            name_max_length: 15,
            description_max_length: 3000,
            passthrough_keys: &["id", "created_at", "updated_at"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("{field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },

    #[error("no updatable fields supplied")]
    Empty,
}

/// A validated, non-empty set of column updates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    fields: Vec<CompanyField>,
}

impl CompanyPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any earlier value for the same column
    pub fn with(mut self, field: CompanyField) -> Self {
        match self.fields.iter_mut().find(|f| f.column() == field.column()) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn fields(&self) -> &[CompanyField] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn apply_to(&self, company: &mut Company) {
        for field in &self.fields {
            field.apply_to(company);
        }
    }

    /// Parse and validate a PATCH body.
    ///
    /// Fields keep the iteration order of `body`.
    pub fn parse(body: &Map<String, Value>, rules: &PatchRules) -> Result<Self, PatchError> {
        let mut patch = Self::new();

        for (key, value) in body {
            let field = match key.as_str() {
                "name" => CompanyField::Name(parse_name(value, rules)?),
                "description" => CompanyField::Description(parse_description(value, rules)?),
                "amount_of_employees" => {
                    CompanyField::AmountOfEmployees(parse_amount_of_employees(value)?)
                }
                "registered" => CompanyField::Registered(value.as_bool().ok_or_else(|| {
                    invalid("registered", "must be a boolean")
                })?),
                "type" => CompanyField::Type(parse_company_type(value)?),
                other if rules.passthrough_keys.contains(&other) => continue,
                other => return Err(PatchError::UnknownField(other.to_string())),
            };
            patch = patch.with(field);
        }

        if patch.is_empty() {
            return Err(PatchError::Empty);
        }

        Ok(patch)
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> PatchError {
    PatchError::Invalid {
        field,
        message: message.into(),
    }
}

fn parse_name(value: &Value, rules: &PatchRules) -> Result<String, PatchError> {
    let name = value
        .as_str()
        .ok_or_else(|| invalid("name", "must be a string"))?;

    if !validator::validate_length(
        name,
        Some(rules.name_min_length),
        Some(rules.name_max_length),
        None,
    ) {
        return Err(invalid(
            "name",
            format!(
                "must be between {} and {} characters",
                rules.name_min_length, rules.name_max_length
            ),
        ));
    }

    Ok(name.to_string())
}

fn parse_description(value: &Value, rules: &PatchRules) -> Result<String, PatchError> {
    let description = value
        .as_str()
        .ok_or_else(|| invalid("description", "must be a string"))?;

    if !validator::validate_length(description, None, Some(rules.description_max_length), None)
    {
        return Err(invalid(
            "description",
            format!("must be at most {} characters", rules.description_max_length),
        ));
    }

    Ok(description.to_string())
}

fn parse_amount_of_employees(value: &Value) -> Result<i32, PatchError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) => {
            s.parse::<i32>().ok()
        }
        _ => None,
    };

    match parsed {
        Some(n) if n >= 0 => Ok(n),
        _ => Err(invalid(
            "amount_of_employees",
            "must be a non-negative whole number",
        )),
    }
}

fn parse_company_type(value: &Value) -> Result<CompanyType, PatchError> {
    value.as_str().and_then(CompanyType::parse).ok_or_else(|| {
        let allowed: Vec<&str> = CompanyType::ALL.iter().map(|t| t.as_str()).collect();
        invalid("type", format!("must be one of {}", allowed.join(", ")))
    })
}
