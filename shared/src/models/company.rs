//! Company model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_uuid_v4;

/// Legal form of a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyType {
    Corporations,
    NonProfit,
    Cooperative,
    #[serde(rename = "Sole Proprietorship")]
    SoleProprietorship,
}

impl CompanyType {
    pub const ALL: [CompanyType; 4] = [
        CompanyType::Corporations,
        CompanyType::NonProfit,
        CompanyType::Cooperative,
        CompanyType::SoleProprietorship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyType::Corporations => "Corporations",
            CompanyType::NonProfit => "NonProfit",
            CompanyType::Cooperative => "Cooperative",
            CompanyType::SoleProprietorship => "Sole Proprietorship",
        }
    }

    /// Parse the stored/wire representation. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl std::fmt::Display for CompanyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A company record.
///
/// The `id` is supplied by the caller on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Company {
    #[validate(custom = "validate_uuid_v4")]
    pub id: String,

    #[validate(length(min = 1, max = 15, message = "must be between 1 and 15 characters"))]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 3000, message = "must be at most 3000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount_of_employees: i32,

    pub registered: bool,

    #[serde(rename = "type")]
    pub company_type: CompanyType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_type_round_trips_wire_names() {
        for t in CompanyType::ALL {
            assert_eq!(CompanyType::parse(t.as_str()), Some(t));
        }
        assert_eq!(CompanyType::parse("sole proprietorship"), None);
        assert_eq!(CompanyType::parse(""), None);
    }

    #[test]
    fn test_company_json_uses_type_key() {
        let json = serde_json::json!({
            "id": "041d2027-e6fa-4d6d-836d-eedb235c82bc",
            "name": "xyz",
            "amount_of_employees": 100,
            "registered": true,
            "type": "Sole Proprietorship"
        });

        let company: Company = serde_json::from_value(json).unwrap();
        assert_eq!(company.company_type, CompanyType::SoleProprietorship);
        assert_eq!(company.description, None);

        let back = serde_json::to_value(&company).unwrap();
        assert_eq!(back["type"], "Sole Proprietorship");
        assert!(back.get("description").is_none());
    }

    #[test]
    fn test_company_rejects_unknown_type() {
        let json = serde_json::json!({
            "id": "041d2027-e6fa-4d6d-836d-eedb235c82bc",
            "name": "xyz",
            "amount_of_employees": 100,
            "registered": true,
            "type": "Partnership"
        });

        assert!(serde_json::from_value::<Company>(json).is_err());
    }
}
