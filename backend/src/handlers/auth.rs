//! Authentication handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(body) = payload?;

    if !state.login.login(&body.email, &body.password) {
        tracing::debug!("login refused");
        return Err(AppError::Unauthorized("Unauthorized".to_string()));
    }

    let token = state.jwt.generate_token(&body.email, true)?;
    Ok(Json(LoginResponse { token }))
}
