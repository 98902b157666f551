use axum::{Json, extract::State};
use serde_json::Value;
use tracing::{info, instrument};

use contentops_core::errors::ErrorResponse;
use contentops_core::{AppError, ServiceError};
use contentops_observability::track_job_enqueued;

use crate::middleware::auth::CurrentPrincipal;
use crate::middleware::role::RequireTranslator;
use crate::modules::translations::model::{
    TRANSLATE_PAGE_JOB, TranslatePageDto, TranslatePageJob, TranslatePageResponse,
};
use crate::state::AppState;
use crate::validator::{ApiPath, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/translations/languages",
    responses(
        (status = 200, description = "Languages the organization can translate into", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Translations"
)]
#[instrument(skip_all)]
pub async fn languages(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<Value>, AppError> {
    let languages = state.services.translations.languages(&principal).await?;
    Ok(Json(languages))
}

#[utoipa::path(
    post,
    path = "/api/translations/pages",
    request_body = TranslatePageDto,
    responses(
        (status = 200, description = "Translation queued", body = TranslatePageResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - owner, admin or translator only", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Translations"
)]
#[instrument(skip_all, fields(page_id = %dto.page_id, organization_id = %translator.0.organization_id))]
pub async fn translate_page(
    State(state): State<AppState>,
    translator: RequireTranslator,
    ValidatedJson(dto): ValidatedJson<TranslatePageDto>,
) -> Result<Json<TranslatePageResponse>, AppError> {
    let principal = translator.0;
    let translation = state
        .services
        .translations
        .translate_page(&principal, &dto)
        .await?;

    let payload = serde_json::to_value(TranslatePageJob {
        organization_id: principal.organization_id,
        requested_by: principal.user_id,
        page_id: &dto.page_id,
        languages: &dto.languages,
        overwrite: dto.overwrite,
        translation: &translation,
    })?;

    let job_id = state
        .jobs
        .send(TRANSLATE_PAGE_JOB, payload)
        .await
        .map_err(|e| ServiceError::Queue {
            job: TRANSLATE_PAGE_JOB.to_string(),
            source: e.into(),
        })?;

    track_job_enqueued(TRANSLATE_PAGE_JOB);
    info!(%job_id, "Translation job enqueued");

    Ok(Json(TranslatePageResponse {
        job_id,
        translation,
    }))
}

#[utoipa::path(
    get,
    path = "/api/translations/pages/{page_id}",
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Translation status of the page", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Translations"
)]
#[instrument(skip(state, principal))]
pub async fn page_status(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(page_id): ApiPath<String>,
) -> Result<Json<Value>, AppError> {
    let status = state
        .services
        .translations
        .page_status(&principal, page_id)
        .await?;
    Ok(Json(status))
}
