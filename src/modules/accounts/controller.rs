use axum::{Json, extract::State};
use serde_json::Value;
use tracing::instrument;

use contentops_core::AppError;
use contentops_core::errors::ErrorResponse;

use crate::middleware::auth::CurrentPrincipal;
use crate::middleware::role::RequireAdmin;
use crate::modules::accounts::model::{InviteMemberDto, UpdateAccountDto};
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/account",
    responses(
        (status = 200, description = "Account of the current session", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Account"
)]
#[instrument(skip_all, fields(user_id = %principal.user_id))]
pub async fn get_account(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<Value>, AppError> {
    let account = state.services.accounts.get_account(&principal).await?;
    Ok(Json(account))
}

#[utoipa::path(
    patch,
    path = "/api/account",
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account updated", body = serde_json::Value),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - owner or admin only", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Account"
)]
#[instrument(skip_all, fields(user_id = %principal.user_id))]
pub async fn update_account(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ValidatedJson(dto): ValidatedJson<UpdateAccountDto>,
) -> Result<Json<Value>, AppError> {
    let account = state.services.accounts.update_account(&principal, dto).await?;
    Ok(Json(account))
}

#[utoipa::path(
    get,
    path = "/api/organization",
    responses(
        (status = 200, description = "Organization of the current session", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Account"
)]
#[instrument(skip_all, fields(organization_id = %principal.organization_id))]
pub async fn get_organization(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<Value>, AppError> {
    let organization = state.services.accounts.get_organization(&principal).await?;
    Ok(Json(organization))
}

#[utoipa::path(
    get,
    path = "/api/organization/members",
    responses(
        (status = 200, description = "Members of the organization", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - owner or admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Account"
)]
#[instrument(skip_all, fields(organization_id = %principal.organization_id))]
pub async fn list_members(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<Value>, AppError> {
    let members = state.services.accounts.list_members(&principal).await?;
    Ok(Json(members))
}

#[utoipa::path(
    post,
    path = "/api/organization/members",
    request_body = InviteMemberDto,
    responses(
        (status = 200, description = "Invitation sent", body = serde_json::Value),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - owner or admin only", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Account"
)]
#[instrument(skip_all, fields(organization_id = %admin.0.organization_id))]
pub async fn invite_member(
    State(state): State<AppState>,
    admin: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<InviteMemberDto>,
) -> Result<Json<Value>, AppError> {
    let invitation = state.services.accounts.invite_member(&admin.0, dto).await?;
    Ok(Json(invitation))
}
