// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Session cookie attribute tests.
//!
//! Login and logout must agree on cookie attributes, and the `Secure`
//! flag follows the frontend origin.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use tower::ServiceExt;

mod common;

const CREDENTIALS: &str = r#"{"username":"siti","password":"mie-enak"}"#;

fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

fn find_cookie(headers: &[String], name: &str) -> String {
    headers
        .iter()
        .find(|value| value.starts_with(&format!("{name}=")))
        .cloned()
        .unwrap_or_else(|| panic!("missing Set-Cookie header for {name}: {headers:?}"))
}

async fn login(app: &common::TestApp) -> Response {
    app.state.credentials.register("siti", "mie-enak").unwrap();
    app.router
        .clone()
        .oneshot(common::json_request("POST", "/auth/login", None, CREDENTIALS))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_login_cookie_localhost_attributes() {
    let app = common::create_test_app_with_frontend_url("http://localhost:5173");

    let response = login(&app).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = find_cookie(&set_cookie_headers(&response), "sodium_session");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains(&format!("Max-Age={}", 7 * 24 * 60 * 60)));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_login_cookie_production_is_secure() {
    let app = common::create_test_app_with_frontend_url("https://sodium.example.com");

    let response = login(&app).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = find_cookie(&set_cookie_headers(&response), "sodium_session");
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_logout_cookie_removal_attributes() {
    let app = common::create_test_app_with_frontend_url("https://sodium.example.com");

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .header(header::COOKIE, "sodium_session=test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cookie = find_cookie(&set_cookie_headers(&response), "sodium_session");
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
}

#[tokio::test]
async fn test_login_cookie_opens_session() {
    let app = common::create_test_app();

    let response = login(&app).await;
    let cookie = find_cookie(&set_cookie_headers(&response), "sodium_session");
    let pair = cookie.split(';').next().unwrap().to_string();

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/me")
                .header(header::COOKIE, pair)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
