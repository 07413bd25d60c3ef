//! Route definitions for the Companies API

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Liveness (public)
        .route("/", get(handlers::api_status))
        // Auth (public)
        .route("/login", post(handlers::login))
        // Company reads (public)
        .route("/company/:id", get(handlers::get_company))
        // Company writes (protected)
        .merge(company_write_routes(state))
}

/// Company mutation routes (protected)
fn company_write_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/company", post(handlers::create_company))
        .route(
            "/company/:id",
            patch(handlers::update_company).delete(handlers::delete_company),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
