mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::*;
use contentops_auth::{Principal, Role, create_session_token};
use contentops_config::SessionConfig;

#[tokio::test]
async fn test_unsupported_method_is_empty_not_found() {
    let app = build_app();
    let cookie = session_cookie(&app, EVERY_ROLE);

    for route in gated_routes() {
        for session in [None, Some(cookie.as_str())] {
            let response = send(&app, Method::DELETE, &route.path, session, None).await;
            assert_eq!(
                response.status,
                StatusCode::NOT_FOUND,
                "DELETE {} answered {}",
                route.path,
                response.status
            );
            assert!(response.body.is_empty(), "DELETE {} has a body", route.path);
        }
    }

    assert_eq!(app.services.call_count(), 0);
}

#[tokio::test]
async fn test_undeclared_methods_on_known_paths() {
    let app = build_app();
    let cookie = session_cookie(&app, EVERY_ROLE);

    for (method, path) in [
        (Method::POST, "/api/account"),
        (Method::GET, "/api/compose"),
        (Method::PUT, "/api/translations/pages"),
        (Method::GET, "/api/workflow/stop-automation"),
        (Method::POST, "/api/workflow/page-item"),
        (Method::GET, "/api/listing-quality/score"),
        (Method::PATCH, "/api/resetsession"),
        (Method::POST, "/api-docs/openapi.json"),
        (Method::POST, "/scalar"),
        (Method::DELETE, "/health"),
    ] {
        let response = send(&app, method.clone(), path, Some(&cookie), None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{} {}", method, path);
        assert!(response.body.is_empty());
    }

    assert_eq!(app.services.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = build_app();
    let response = send(&app, Method::GET, "/api/inventory", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_session_is_rejected_before_the_service() {
    let app = build_app();

    for route in gated_routes() {
        let response = send(&app, route.method.clone(), &route.path, None, route.body.clone()).await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{} {}",
            route.method,
            route.path
        );
        assert_eq!(response.json()["error"], "Authentication required");
    }

    assert_eq!(app.services.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_session_is_rejected_before_the_service() {
    let app = build_app();
    let foreign = SessionConfig {
        secret: "some-other-secret".to_string(),
        ..SessionConfig::default()
    };
    let token = create_session_token(&principal_with(EVERY_ROLE), &foreign).unwrap();

    for cookie in [
        format!("contentops_session={}", token),
        "contentops_session=not-a-token".to_string(),
        "contentops_session=".to_string(),
    ] {
        for route in gated_routes() {
            let response = send(
                &app,
                route.method.clone(),
                &route.path,
                Some(&cookie),
                route.body.clone(),
            )
            .await;
            assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{}", route.path);
        }
    }

    assert_eq!(app.services.call_count(), 0);
}

#[tokio::test]
async fn test_missing_role_is_forbidden_before_the_service() {
    let app = build_app();

    for route in gated_routes().into_iter().filter(|r| !r.roles.is_empty()) {
        let outsiders: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|role| !route.roles.contains(role))
            .collect();
        let cookie = session_cookie(&app, &outsiders);

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
            StatusCode::FORBIDDEN,
            "{} {} with roles {:?}",
            route.method,
            route.path,
            outsiders
        );
        assert!(
            response.json()["error"]
                .as_str()
                .unwrap()
                .starts_with("Access denied")
        );
    }

    assert_eq!(app.services.call_count(), 0);
}

#[tokio::test]
async fn test_principal_without_roles_is_forbidden_on_role_routes() {
    let app = build_app();
    let cookie = session_cookie(&app, &[]);

    for route in gated_routes().into_iter().filter(|r| !r.roles.is_empty()) {
        let response = send(
            &app,
            route.method.clone(),
            &route.path,
            Some(&cookie),
            route.body.clone(),
        )
        .await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{}", route.path);
    }

    assert_eq!(app.services.call_count(), 0);
}

#[tokio::test]
async fn test_any_listed_role_is_enough() {
    for route in gated_routes().into_iter().filter(|r| !r.roles.is_empty()) {
        for role in route.roles {
            let app = build_app();
            let cookie = session_cookie(&app, &[*role]);

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
                StatusCode::OK,
                "{} {} as {}",
                route.method,
                route.path,
                role
            );
            assert_eq!(app.services.calls(), vec![route.operation.to_string()]);
        }
    }
}

#[tokio::test]
async fn test_signed_in_caller_reaches_each_operation_once() {
    let app = build_app();
    let cookie = session_cookie(&app, &[Role::Viewer]);

    for route in gated_routes().into_iter().filter(|r| r.roles.is_empty()) {
        let before = app.services.call_count();
        let response = send(
            &app,
            route.method.clone(),
            &route.path,
            Some(&cookie),
            route.body.clone(),
        )
        .await;

        assert_eq!(response.status, StatusCode::OK, "{}", route.path);
        assert_eq!(response.json()["operation"], route.operation);
        assert_eq!(app.services.call_count(), before + 1);
    }
}

#[tokio::test]
async fn test_bearer_token_is_accepted() {
    let app = build_app();
    let principal = Principal {
        organization_id: ORGANIZATION_ID,
        ..principal_with(&[Role::Viewer])
    };
    let token = create_session_token(&principal, &app.session_config).unwrap();

    let request = axum::http::Request::builder()
        .uri("/api/organization")
        .header("authorization", format!("Bearer {}", token))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.services.calls(), vec!["accounts/get-organization"]);
}

#[tokio::test]
async fn test_query_is_clamped_before_the_service() {
    let app = build_app();
    let cookie = session_cookie(&app, &[Role::Viewer]);

    let response = send(
        &app,
        Method::GET,
        "/api/products?search=boots&page=0&limit=5000",
        Some(&cookie),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json()["params"],
        json!({ "search": "boots", "page": 1, "limit": 250, "offset": 0 })
    );
}

#[tokio::test]
async fn test_body_validation() {
    let app = build_app();
    let cookie = session_cookie(&app, &[Role::Editor]);

    let response = send(
        &app,
        Method::POST,
        "/api/compose",
        Some(&cookie),
        Some(json!({ "product_id": "gid-1", "fields": [] })),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["error"], "at least one field must be requested");

    let response = send(
        &app,
        Method::POST,
        "/api/compose",
        Some(&cookie),
        Some(json!({ "fields": ["title"] })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "product_id is required");

    assert_eq!(app.services.call_count(), 0);
}

#[tokio::test]
async fn test_huge_page_is_clamped() {
    let app = build_app();
    let cookie = session_cookie(&app, &[Role::Viewer]);

    let response = send(
        &app,
        Method::GET,
        &format!("/api/products?page={}&limit=250", i64::MAX),
        Some(&cookie),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let params = &response.json()["params"];
    assert_eq!(params["page"], i64::MAX / 250);
    assert_eq!(params["limit"], 250);
    assert!(params["offset"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_malformed_query_and_path_are_json_bad_requests() {
    let app = build_app();
    let cookie = session_cookie(&app, EVERY_ROLE);

    for uri in [
        "/api/products?page=first",
        "/api/workflow/not-a-uuid/items",
    ] {
        let response = send(&app, Method::GET, uri, Some(&cookie), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(response.json()["error"].is_string(), "{}", uri);
    }

    assert_eq!(app.services.call_count(), 0);
}
