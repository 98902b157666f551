use axum::{Json, extract::State};
use serde_json::Value;
use tracing::instrument;

use contentops_core::errors::ErrorResponse;

use crate::middleware::auth::CurrentPrincipal;
use crate::modules::listing_quality::model::{
    ListingQualityErrorBody, ListingQualityFailure, ScoreListingDto,
};
use crate::state::AppState;
use crate::validator::{ApiPath, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/listing-quality/score",
    request_body = ScoreListingDto,
    responses(
        (status = 200, description = "Listing quality score", body = serde_json::Value),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Scoring failed", body = ListingQualityErrorBody)
    ),
    security(("session_cookie" = [])),
    tag = "Listing Quality"
)]
#[instrument(skip_all, fields(product_id = %dto.product_id))]
pub async fn score(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ValidatedJson(dto): ValidatedJson<ScoreListingDto>,
) -> Result<Json<Value>, ListingQualityFailure> {
    let score = state.services.listing_quality.score(&principal, dto).await?;
    Ok(Json(score))
}

#[utoipa::path(
    get,
    path = "/api/listing-quality/report/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Listing quality report", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Report failed", body = ListingQualityErrorBody)
    ),
    security(("session_cookie" = [])),
    tag = "Listing Quality"
)]
#[instrument(skip(state, principal))]
pub async fn report(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(product_id): ApiPath<String>,
) -> Result<Json<Value>, ListingQualityFailure> {
    let report = state
        .services
        .listing_quality
        .report(&principal, product_id)
        .await?;
    Ok(Json(report))
}
