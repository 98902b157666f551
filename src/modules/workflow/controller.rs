use axum::{Json, extract::State};
use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use contentops_core::AppError;
use contentops_core::errors::ErrorResponse;

use crate::middleware::auth::CurrentPrincipal;
use crate::middleware::role::RequireReviewer;
use crate::modules::workflow::model::{CompleteItemDto, SavePageWorkflowItemDto, StopAutomationDto};
use crate::state::AppState;
use crate::validator::{ApiPath, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/workflow/stop-automation",
    request_body = StopAutomationDto,
    responses(
        (status = 200, description = "Automation stopped", body = serde_json::Value),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - owner, admin or reviewer only", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Workflow"
)]
#[instrument(skip_all, fields(workflow_id = %dto.workflow_id, user_id = %principal.user_id))]
pub async fn stop_automation(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ValidatedJson(dto): ValidatedJson<StopAutomationDto>,
) -> Result<Json<Value>, AppError> {
    let result = state.services.workflow.stop_automation(&principal, dto).await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/workflow/complete-item",
    request_body = CompleteItemDto,
    responses(
        (status = 200, description = "Item completed", body = serde_json::Value),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - owner, admin or reviewer only", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Workflow"
)]
#[instrument(skip_all, fields(item_id = %dto.item_id, outcome = ?dto.outcome))]
pub async fn complete_item(
    State(state): State<AppState>,
    reviewer: RequireReviewer,
    ValidatedJson(dto): ValidatedJson<CompleteItemDto>,
) -> Result<Json<Value>, AppError> {
    let result = state.services.workflow.complete_item(&reviewer.0, dto).await?;
    Ok(Json(result))
}

#[utoipa::path(
    put,
    path = "/api/workflow/page-item",
    request_body = SavePageWorkflowItemDto,
    responses(
        (status = 200, description = "Workflow item saved", body = serde_json::Value),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - editors and reviewers only", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Workflow"
)]
#[instrument(skip_all, fields(workflow_id = %dto.workflow_id, page_id = %dto.page_id))]
pub async fn save_page_workflow_item(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ValidatedJson(dto): ValidatedJson<SavePageWorkflowItemDto>,
) -> Result<Json<Value>, AppError> {
    let item = state
        .services
        .workflow
        .save_page_workflow_item(&principal, dto)
        .await?;
    Ok(Json(item))
}

#[utoipa::path(
    get,
    path = "/api/workflow/{workflow_id}/items",
    params(
        ("workflow_id" = Uuid, Path, description = "Workflow ID")
    ),
    responses(
        (status = 200, description = "Items of the workflow", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Workflow"
)]
#[instrument(skip(state, principal))]
pub async fn list_items(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(workflow_id): ApiPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    let items = state
        .services
        .workflow
        .list_items(&principal, workflow_id)
        .await?;
    Ok(Json(items))
}
