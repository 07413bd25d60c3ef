//! Login and bearer gate tests

mod common;

use axum::http::StatusCode;
use common::*;
use companies_backend::{config::JwtConfig, services::JwtService};
use serde_json::json;

fn foreign_token(secret: &str, issuer: &str, expiry: i64) -> String {
    JwtService::new(&JwtConfig {
        secret: secret.to_string(),
        issuer: issuer.to_string(),
        token_expiry: expiry,
    })
    .generate_token(EMAIL, true)
    .unwrap()
}

#[tokio::test]
async fn test_login_success() {
    let app = test_app();
    let token = login(&app).await;

    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_wrong_credentials() {
    let app = test_app();

    for (email, password) in [(EMAIL, "wrong"), ("other@company.com", PASSWORD), ("", "")] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error_code"], "ERR_API_UNAUTHORIZED");
        assert_eq!(body["error_message"], "Unauthorized");
    }
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/v1/login", None, Some(json!({ "email": EMAIL }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "ERR_API_BAD_REQUEST");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/v1/company", None, Some(company_json(COMPANY_ID, "xyz"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({
            "status": 401,
            "error_code": "ERR_API_UNAUTHORIZED",
            "error_message": "nil token"
        })
    );

    let uri = format!("/api/v1/company/{}", COMPANY_ID);
    let (status, _) = send(&app, "PATCH", &uri, None, Some(json!({ "name": "abc" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, "DELETE", &uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unreadable_query_string_is_bad_request() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/company?token={0}&token={0}", token),
        None,
        Some(company_json(COMPANY_ID, "xyz")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "status": 400,
            "error_code": "ERR_API_BAD_REQUEST",
            "error_message": "Invalid request body"
        })
    );
}

#[tokio::test]
async fn test_malformed_token_is_bad_request() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/company",
        Some("Bearer garbage"),
        Some(company_json(COMPANY_ID, "xyz")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "ERR_API_BAD_REQUEST");
    assert_eq!(body["error_message"], "Malformed token");
}

#[tokio::test]
async fn test_rejected_tokens_are_unauthorized() {
    let app = test_app();

    for token in [
        foreign_token("some-other-secret", "companies-api", 3600),
        foreign_token(TEST_SECRET, "someone-else", 3600),
        foreign_token(TEST_SECRET, "companies-api", -3600),
    ] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/company",
            Some(&format!("Bearer {}", token)),
            Some(company_json(COMPANY_ID, "xyz")),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error_message"], "Unauthorized");
    }

    // nothing slipped through
    let (status, _) = send(&app, "GET", &format!("/api/v1/company/{}", COMPANY_ID), None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_token_in_query_string() {
    let app = test_app();
    let token = login(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/v1/company?token={}", token),
        None,
        Some(company_json(COMPANY_ID, "xyz")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // the query parameter wins over a bad header
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/company/{}?token={}", COMPANY_ID, token),
        Some("Bearer garbage"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_raw_header_without_scheme() {
    let app = test_app();
    let token = login(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/company",
        Some(&token),
        Some(company_json(COMPANY_ID, "xyz")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_reads_need_no_token() {
    let app = test_app();
    let auth = bearer(&app).await;
    send(&app, "POST", "/api/v1/company", Some(&auth), Some(company_json(COMPANY_ID, "xyz"))).await;

    let (status, body) = send(&app, "GET", &format!("/api/v1/company/{}", COMPANY_ID), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "xyz");
}
