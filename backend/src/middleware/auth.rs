//! Authentication middleware
//!
//! Bearer token gate for the mutating company routes. The token is read from the
//! `token` query parameter first, then from the `Authorization` header.

use axum::{
    extract::{rejection::QueryRejection, Query, Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::TokenError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// Authentication middleware that validates JWT tokens.
///
/// Missing or invalid tokens are rejected with 401, unparseable ones with 400.
/// Claims are not forwarded to handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("rejected query string: {}", e.body_text());
        AppError::BadRequest
    })?;

    let token = extract_token(query.token.as_deref(), request.headers())
        .ok_or_else(|| AppError::Unauthorized("nil token".to_string()))?;

    match state.jwt.validate_token(&token) {
        Ok(claims) => {
            tracing::debug!(subject = %claims.sub, "authorized request");
            Ok(next.run(request).await)
        }
        Err(TokenError::Malformed(reason)) => {
            tracing::debug!(%reason, "rejected malformed token");
            Err(AppError::MalformedToken)
        }
        Err(TokenError::Invalid(reason)) => {
            tracing::debug!(%reason, "rejected invalid token");
            Err(AppError::Unauthorized("Unauthorized".to_string()))
        }
    }
}

/// Token from the query string, else from `Authorization: <scheme> <token>`.
///
/// A header without exactly one space is used as the raw token.
pub fn extract_token(query_token: Option<&str>, headers: &HeaderMap) -> Option<String> {
    if let Some(token) = query_token.filter(|t| !t.is_empty()) {
        return Some(token.to_string());
    }

    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let parts: Vec<&str> = header.split(' ').collect();
    let token = match parts.as_slice() {
        [_, token] => *token,
        _ => header,
    };

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
