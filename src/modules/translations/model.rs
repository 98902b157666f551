use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Name of the background job that performs a page translation.
pub const TRANSLATE_PAGE_JOB: &str = "translate-page";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TranslatePageDto {
    #[validate(length(min = 1, message = "page_id must not be empty"))]
    pub page_id: String,
    /// Target language tags, e.g. `de`, `fr-CA`
    #[validate(length(min = 1, message = "at least one target language is required"))]
    pub languages: Vec<String>,
    #[serde(default)]
    pub overwrite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslatePageResponse {
    /// Background job carrying out the translation
    pub job_id: Uuid,
    pub translation: Value,
}

/// Payload of a `translate-page` job.
#[derive(Debug, Clone, Serialize)]
pub struct TranslatePageJob<'a> {
    pub organization_id: Uuid,
    pub requested_by: Uuid,
    pub page_id: &'a str,
    pub languages: &'a [String],
    pub overwrite: bool,
    pub translation: &'a Value,
}
