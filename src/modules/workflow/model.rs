use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StopAutomationDto {
    pub workflow_id: Uuid,
    #[validate(length(max = 500, message = "reason must be at most 500 characters"))]
    pub reason: Option<String>,
}

/// Decision a reviewer records for a workflow item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemOutcome {
    Approved,
    Rejected,
    Skipped,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompleteItemDto {
    pub workflow_id: Uuid,
    pub item_id: Uuid,
    pub outcome: ItemOutcome,
    #[validate(length(max = 2000, message = "comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}

/// Draft content for one page inside a review workflow.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SavePageWorkflowItemDto {
    pub workflow_id: Uuid,
    #[validate(length(min = 1, message = "page_id must not be empty"))]
    pub page_id: String,
    pub content: Value,
    #[serde(default)]
    pub submit_for_review: bool,
}
