use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::{MethodRouter, get};
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use contentops_observability::{logging_middleware, metrics_middleware};

use crate::docs::ApiDoc;
use crate::middleware::auth::require_auth;
use crate::modules::accounts::router::init_accounts_router;
use crate::modules::catalog::router::init_catalog_router;
use crate::modules::compose::router::init_compose_router;
use crate::modules::listing_quality::router::init_listing_quality_router;
use crate::modules::reviews::router::init_reviews_router;
use crate::modules::session::router::init_session_router;
use crate::modules::translations::router::init_translations_router;
use crate::modules::workflow::router::init_workflow_router;
use crate::state::AppState;

/// Answer for a known path called with a method it does not declare.
pub async fn method_not_supported() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Puts `methods` behind [`require_auth`].
///
/// The gate only wraps the declared methods, so any other method gets the
/// empty 404 whether or not the caller is signed in.
pub fn authenticated(state: &AppState, methods: MethodRouter<AppState>) -> MethodRouter<AppState> {
    methods
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .fallback(method_not_supported)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .merge(init_accounts_router(&state))
                .merge(init_catalog_router(&state))
                .merge(init_compose_router(&state))
                .merge(init_reviews_router(&state))
                .merge(init_translations_router(&state))
                .merge(init_workflow_router(&state))
                .merge(init_listing_quality_router(&state))
                .merge(init_session_router()),
        )
        .method_not_allowed_fallback(method_not_supported)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::OPTIONS,
                ])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
                .allow_credentials(true)
        })
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
