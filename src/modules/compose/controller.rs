use axum::{Json, extract::State};
use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use contentops_core::AppError;
use contentops_core::errors::ErrorResponse;

use crate::middleware::auth::CurrentPrincipal;
use crate::middleware::role::RequireEditor;
use crate::modules::compose::model::GenerateContentDto;
use crate::state::AppState;
use crate::validator::{ApiPath, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/compose",
    request_body = GenerateContentDto,
    responses(
        (status = 200, description = "Generated suggestions", body = serde_json::Value),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - owner, admin or editor only", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Compose"
)]
#[instrument(skip_all, fields(user_id = %principal.user_id, product_id = %dto.product_id))]
pub async fn generate(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ValidatedJson(dto): ValidatedJson<GenerateContentDto>,
) -> Result<Json<Value>, AppError> {
    let suggestions = state.services.compose.generate(&principal, dto).await?;
    Ok(Json(suggestions))
}

#[utoipa::path(
    get,
    path = "/api/compose/concepts",
    responses(
        (status = 200, description = "Concepts available to the organization", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Compose"
)]
#[instrument(skip_all)]
pub async fn list_concepts(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<Value>, AppError> {
    let concepts = state.services.compose.list_concepts(&principal).await?;
    Ok(Json(concepts))
}

#[utoipa::path(
    post,
    path = "/api/compose/suggestions/{id}/accept",
    params(
        ("id" = Uuid, Path, description = "Suggestion ID")
    ),
    responses(
        (status = 200, description = "Suggestion applied to the product", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - owner, admin or editor only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Compose"
)]
#[instrument(skip(state, editor), fields(user_id = %editor.0.user_id))]
pub async fn accept_suggestion(
    State(state): State<AppState>,
    editor: RequireEditor,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    let result = state.services.compose.accept_suggestion(&editor.0, id).await?;
    Ok(Json(result))
}
