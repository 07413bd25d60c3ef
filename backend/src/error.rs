//! Error handling for the Companies API
//!
//! Every failure leaves the service as `{status, error_code, error_message}` with a
//! fixed HTTP status per error kind.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::PatchError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid request body")]
    BadRequest,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("No records found")]
    NoRecordsFound,

    #[error("No records found for given name")]
    NoCompanyRecordsFoundByName,

    #[error("No records found for given ID")]
    NoCompanyRecordsFoundById,

    #[error("Record already exist for given name")]
    RecordAlreadyExistsForGivenName,

    #[error("Unable to create company")]
    UnableToCreateCompany,

    #[error("Unable to fetch company")]
    UnableToFetchCompany,

    #[error("Unable to delete company")]
    UnableToDeleteCompany,

    #[error("Unable to update company")]
    UnableToUpdateCompany,

    #[error("Internal server error")]
    InternalServerError,

    // Auth gate errors
    #[error("{0}")]
    Unauthorized(String),

    #[error("Malformed token")]
    MalformedToken,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    pub error_code: String,
    pub error_message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest
            | AppError::Validation(_)
            | AppError::NoRecordsFound
            | AppError::NoCompanyRecordsFoundByName
            | AppError::NoCompanyRecordsFoundById
            | AppError::RecordAlreadyExistsForGivenName
            | AppError::MalformedToken => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::UnableToCreateCompany
            | AppError::UnableToFetchCompany
            | AppError::UnableToDeleteCompany
            | AppError::UnableToUpdateCompany
            | AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest | AppError::MalformedToken => "ERR_API_BAD_REQUEST",
            AppError::Validation(_) => "ERR_API_VALIDATION_FAILED",
            AppError::NoRecordsFound => "ERR_API_NO_RECORDS_FOUND",
            AppError::NoCompanyRecordsFoundByName => {
                "ERR_API_NO_COMPANY_RECORDS_FOUND_FOR_GIVEN_NAME"
            }
            AppError::NoCompanyRecordsFoundById => "ERR_API_NO_COMPANY_RECORDS_FOUND_FOR_GIVEN_ID",
            AppError::RecordAlreadyExistsForGivenName => {
                "ERR_API_RECORD_ALREADY_EXISTS_FOR_GIVEN_NAME"
            }
            AppError::UnableToCreateCompany => "ERR_API_UNABLE_TO_CREATE_COMPANY",
            AppError::UnableToFetchCompany => "ERR_API_UNABLE_TO_FETCH_COMPANY",
            AppError::UnableToDeleteCompany => "ERR_API_UNABLE_TO_DELETE_COMPANY",
            AppError::UnableToUpdateCompany => "ERR_API_UNABLE_TO_UPDATE_COMPANY",
            AppError::InternalServerError => "ERR_API_SERVER_ERROR",
            AppError::Unauthorized(_) => "ERR_API_UNAUTHORIZED",
        }
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            error_code: self.error_code().to_string(),
            error_message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error_code = self.error_code(), "request failed: {}", self);
        } else {
            tracing::debug!(error_code = self.error_code(), "request rejected: {}", self);
        }

        (status, Json(self.to_response_body())).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {}", rejection.body_text());
        AppError::BadRequest
    }
}

impl From<PatchError> for AppError {
    fn from(err: PatchError) -> Self {
        match err {
            PatchError::Invalid { .. } => AppError::Validation(err.to_string()),
            PatchError::UnknownField(_) | PatchError::Empty => {
                tracing::debug!("rejected patch body: {}", err);
                AppError::BadRequest
            }
        }
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
