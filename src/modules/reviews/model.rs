use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeReviewsDto {
    #[validate(length(min = 1, message = "product_id must not be empty"))]
    pub product_id: String,
    /// Only reviews newer than this many days are analyzed
    #[validate(range(min = 1, max = 3650, message = "since_days must be between 1 and 3650"))]
    pub since_days: Option<u32>,
    #[validate(range(min = 1, max = 5, message = "min_rating must be between 1 and 5"))]
    pub min_rating: Option<u8>,
}
