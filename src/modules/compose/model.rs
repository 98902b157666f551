use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product content a generation run may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentField {
    Title,
    Description,
    BulletPoints,
    SeoTitle,
    SeoDescription,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateContentDto {
    #[validate(length(min = 1, message = "product_id must not be empty"))]
    pub product_id: String,
    /// Concept (tone and brand guidance preset) to write with
    pub concept_id: Option<Uuid>,
    #[validate(length(min = 1, message = "at least one field must be requested"))]
    pub fields: Vec<ContentField>,
    pub language: Option<String>,
    #[validate(length(max = 2000, message = "instructions must be at most 2000 characters"))]
    pub instructions: Option<String>,
}
