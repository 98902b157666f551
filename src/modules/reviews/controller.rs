use axum::{Json, extract::State};
use serde_json::Value;
use tracing::instrument;

use contentops_core::AppError;
use contentops_core::errors::ErrorResponse;

use crate::middleware::auth::CurrentPrincipal;
use crate::modules::reviews::model::AnalyzeReviewsDto;
use crate::state::AppState;
use crate::validator::{ApiPath, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/reviews/analyze",
    request_body = AnalyzeReviewsDto,
    responses(
        (status = 200, description = "Review analysis", body = serde_json::Value),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Reviews"
)]
#[instrument(skip(state, principal))]
pub async fn analyze(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ValidatedJson(dto): ValidatedJson<AnalyzeReviewsDto>,
) -> Result<Json<Value>, AppError> {
    let analysis = state.services.reviews.analyze(&principal, dto).await?;
    Ok(Json(analysis))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{product_id}/summary",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Review summary for the product", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Reviews"
)]
#[instrument(skip(state, principal))]
pub async fn summary(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(product_id): ApiPath<String>,
) -> Result<Json<Value>, AppError> {
    let summary = state.services.reviews.summary(&principal, product_id).await?;
    Ok(Json(summary))
}
