use async_trait::async_trait;
use serde_json::{Value, json};

use contentops_auth::Principal;
use contentops_core::ServiceError;

use crate::modules::reviews::model::AnalyzeReviewsDto;
use crate::upstream::UpstreamServices;

/// Customer review analysis.
#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn analyze(
        &self,
        principal: &Principal,
        dto: AnalyzeReviewsDto,
    ) -> Result<Value, ServiceError>;

    async fn summary(&self, principal: &Principal, product_id: String)
    -> Result<Value, ServiceError>;
}

#[async_trait]
impl ReviewService for UpstreamServices {
    async fn analyze(
        &self,
        principal: &Principal,
        dto: AnalyzeReviewsDto,
    ) -> Result<Value, ServiceError> {
        self.call("reviews/analyze", principal, dto).await
    }

    async fn summary(
        &self,
        principal: &Principal,
        product_id: String,
    ) -> Result<Value, ServiceError> {
        self.call("reviews/summary", principal, json!({ "product_id": product_id }))
            .await
    }
}
