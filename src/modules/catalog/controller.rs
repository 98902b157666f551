use axum::{Json, extract::State};
use serde_json::Value;
use tracing::instrument;

use contentops_core::AppError;
use contentops_core::errors::ErrorResponse;

use crate::middleware::auth::CurrentPrincipal;
use crate::modules::catalog::model::{ProductFilterParams, ProductQuery};
use crate::state::AppState;
use crate::validator::{ApiPath, ApiQuery};

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("search" = Option<String>, Query, description = "Free-text filter"),
        ("page" = Option<i64>, Query, description = "Page number (1-indexed, default: 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (1-250, default: 25)")
    ),
    responses(
        (status = 200, description = "Page of products", body = serde_json::Value),
        (status = 400, description = "Invalid query string", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Catalog"
)]
#[instrument(skip(state, principal), fields(organization_id = %principal.organization_id))]
pub async fn list_products(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiQuery(params): ApiQuery<ProductFilterParams>,
) -> Result<Json<Value>, AppError> {
    let products = state
        .services
        .catalog
        .list_products(&principal, ProductQuery::from(params))
        .await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Catalog"
)]
#[instrument(skip(state, principal))]
pub async fn get_product(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Value>, AppError> {
    let product = state.services.catalog.get_product(&principal, id).await?;
    Ok(Json(product))
}
