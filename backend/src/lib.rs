//! Companies API - Backend
//!
//! CRUD service for company records with a static-credential login that issues
//! bearer tokens for write operations.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::PatchRules;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod repository;
pub mod routes;
pub mod services;

pub use config::Config;

use repository::CompanyRepository;
use services::{CompanyService, JwtService, LoginService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub companies: CompanyService,
    pub login: LoginService,
    pub jwt: JwtService,
    pub patch_rules: Arc<PatchRules>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire every service from configuration and a storage backend
    pub fn new(config: Config, repo: Arc<dyn CompanyRepository>) -> Self {
        Self {
            companies: CompanyService::new(repo),
            login: LoginService::new(&config.login),
            jwt: JwtService::new(&config.jwt),
            patch_rules: Arc::new(PatchRules::default()),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        // nested "/" only matches "/api/v1"
        .route("/api/v1/", get(handlers::api_status))
        .nest("/api/v1", routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Companies API v1.0"
}
