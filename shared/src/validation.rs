//! Validation utilities for the Companies API
//!
//! Full-record rules live on [`Company`] as `validator` derives; this module holds
//! the custom checks those derives call and the helpers shared with partial updates.

use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::Company;

/// Validate a hyphenated RFC 4122 version 4 UUID
pub fn validate_uuid_v4(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == 36
        && Uuid::parse_str(value)
            .map(|id| id.get_version_num() == 4 && id.get_variant() == uuid::Variant::RFC4122)
            .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("uuid_v4");
        error.message = Some("must be a UUID v4".into());
        Err(error)
    }
}

/// Validate every field of a company as one check.
///
/// Returns a single human readable message covering all failing fields.
pub fn validate_company(company: &Company) -> Result<(), String> {
    company.validate().map_err(|e| describe_errors(&e))
}

/// Render validation errors as `field: message` pairs, sorted by field name
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
