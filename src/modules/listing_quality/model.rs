use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use contentops_core::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScoreListingDto {
    #[validate(length(min = 1, message = "product_id must not be empty"))]
    pub product_id: String,
    /// Marketplace whose listing rules the score is computed against
    pub marketplace: Option<String>,
    pub language: Option<String>,
}

/// Body of a failed listing-quality call.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingQualityErrorBody {
    pub success: bool,
    pub err: String,
}

/// Listing-quality failures are reported to the client as
/// `{"success": false, "err": "..."}` with status 500.
#[derive(Debug)]
pub struct ListingQualityFailure(pub ServiceError);

impl From<ServiceError> for ListingQualityFailure {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ListingQualityFailure {
    fn into_response(self) -> Response {
        tracing::error!(
            operation = %self.0.operation(),
            error = %self.0,
            "Listing quality request failed"
        );

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "err": self.0.to_string() })),
        )
            .into_response()
    }
}
