//! Test harness: the full router over an in-memory store

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use companies_backend::{
    config::{Config, DatabaseConfig, JwtConfig, LoginConfig, ServerConfig, StorageBackend},
    create_app,
    repository::InMemoryCompanyRepository,
    AppState,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-for-http-tests";
pub const EMAIL: &str = "admin@company.com";
pub const PASSWORD: &str = "password";
pub const COMPANY_ID: &str = "041d2027-e6fa-4d6d-836d-eedb235c82bc";

pub fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        database: DatabaseConfig {
            backend: StorageBackend::Memory,
            url: String::new(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            issuer: "companies-api".to_string(),
            token_expiry: 3600,
        },
        login: LoginConfig {
            email: EMAIL.to_string(),
            password: PASSWORD.to_string(),
        },
    }
}

pub fn test_app() -> Router {
    create_app(AppState::new(
        test_config(),
        Arc::new(InMemoryCompanyRepository::new()),
    ))
}

pub fn company_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "test company",
        "amount_of_employees": 100,
        "registered": true,
        "type": "Corporations"
    })
}

/// Send a request and return the status with the JSON body (`Null` when empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/login",
        None,
        Some(json!({ "email": EMAIL, "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub async fn bearer(app: &Router) -> String {
    format!("Bearer {}", login(app).await)
}
