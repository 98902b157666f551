mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::*;
use contentops_auth::Role;

#[tokio::test]
async fn test_score_failure_reports_success_false() {
    let app = build_app_with(MockServices::failing());
    let cookie = session_cookie(&app, &[Role::Viewer]);

    let response = send(
        &app,
        Method::POST,
        "/api/listing-quality/score",
        Some(&cookie),
        Some(json!({ "product_id": "gid-1" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert!(
        body["err"]
            .as_str()
            .unwrap()
            .contains("service unavailable")
    );
    assert_eq!(app.services.calls(), vec!["listing-quality/score"]);
}

#[tokio::test]
async fn test_report_failure_reports_success_false() {
    let app = build_app_with(MockServices::failing());
    let cookie = session_cookie(&app, &[Role::Viewer]);

    let response = send(
        &app,
        Method::GET,
        "/api/listing-quality/report/gid-1",
        Some(&cookie),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert!(body["err"].is_string());
}

#[tokio::test]
async fn test_listing_quality_still_requires_a_session() {
    let app = build_app_with(MockServices::failing());

    let response = send(
        &app,
        Method::GET,
        "/api/listing-quality/report/gid-1",
        None,
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.services.call_count(), 0);
}

#[tokio::test]
async fn test_other_failures_do_not_leak_the_cause() {
    let app = build_app_with(MockServices::failing());
    let cookie = session_cookie(&app, EVERY_ROLE);

    for route in gated_routes()
        .into_iter()
        .filter(|r| !r.path.starts_with("/api/listing-quality"))
    {
        let response = send(
            &app,
            route.method.clone(),
            &route.path,
            Some(&cookie),
            route.body.clone(),
        )
        .await;

        assert_eq!(
            response.status,
            StatusCode::INTERNAL_SERVER_ERROR,
            "{}",
            route.path
        );
        assert_eq!(response.json(), json!({ "error": "Internal server error" }));
    }
}
