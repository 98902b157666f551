use async_trait::async_trait;
use serde_json::{Value, json};

use contentops_auth::Principal;
use contentops_core::ServiceError;

use crate::modules::listing_quality::model::ScoreListingDto;
use crate::upstream::UpstreamServices;

#[async_trait]
pub trait ListingQualityService: Send + Sync {
    async fn score(&self, principal: &Principal, dto: ScoreListingDto)
    -> Result<Value, ServiceError>;

    async fn report(&self, principal: &Principal, product_id: String)
    -> Result<Value, ServiceError>;
}

#[async_trait]
impl ListingQualityService for UpstreamServices {
    async fn score(
        &self,
        principal: &Principal,
        dto: ScoreListingDto,
    ) -> Result<Value, ServiceError> {
        self.call("listing-quality/score", principal, dto).await
    }

    async fn report(
        &self,
        principal: &Principal,
        product_id: String,
    ) -> Result<Value, ServiceError> {
        self.call(
            "listing-quality/report",
            principal,
            json!({ "product_id": product_id }),
        )
        .await
    }
}
