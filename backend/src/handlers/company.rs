//! Company HTTP handlers
//!
//! Bind and validate the request, hand it to [`CompanyService`](crate::services::CompanyService),
//! and shape the response.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use shared::{validate_company, Company, CompanyPatch};

use crate::error::{AppError, AppResult};
use crate::AppState;

fn company_id(path: Result<Path<String>, PathRejection>) -> AppResult<String> {
    let Path(id) = path.map_err(|e| {
        tracing::debug!("rejected path: {}", e.body_text());
        AppError::BadRequest
    })?;

    if id.trim().is_empty() {
        return Err(AppError::BadRequest);
    }
    Ok(id)
}

/// Create a company
pub async fn create_company(
    State(state): State<AppState>,
    payload: Result<Json<Company>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let Json(company) = payload?;

    validate_company(&company).map_err(|message| {
        tracing::error!(company_id = %company.id, %message, "handler: create_company validation failed");
        AppError::Validation(message)
    })?;

    let created = state.companies.create_company(company).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a company by id
pub async fn get_company(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Company>> {
    let id = company_id(path)?;
    let company = state.companies.get_company(&id).await?;
    Ok(Json(company))
}

/// Partially update a company
pub async fn update_company(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<Json<Company>> {
    let id = company_id(path)?;
    let Json(body) = payload?;

    let patch = CompanyPatch::parse(&body, &state.patch_rules).map_err(|e| {
        tracing::error!(company_id = %id, error = %e, "handler: update_company validation failed");
        AppError::from(e)
    })?;

    let company = state.companies.update_company(&id, &patch).await?;
    Ok(Json(company))
}

/// Delete a company
pub async fn delete_company(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<String>> {
    let id = company_id(path)?;
    state.companies.delete_company(&id).await?;
    Ok(Json(format!("successfully deleted company with id: {}", id)))
}
