use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use contentops_auth::Principal;
use contentops_core::ServiceError;

use crate::modules::compose::model::GenerateContentDto;
use crate::upstream::UpstreamServices;

/// AI-assisted content generation.
#[async_trait]
pub trait ComposeService: Send + Sync {
    async fn generate(
        &self,
        principal: &Principal,
        dto: GenerateContentDto,
    ) -> Result<Value, ServiceError>;

    async fn list_concepts(&self, principal: &Principal) -> Result<Value, ServiceError>;

    async fn accept_suggestion(
        &self,
        principal: &Principal,
        suggestion_id: Uuid,
    ) -> Result<Value, ServiceError>;
}

#[async_trait]
impl ComposeService for UpstreamServices {
    async fn generate(
        &self,
        principal: &Principal,
        dto: GenerateContentDto,
    ) -> Result<Value, ServiceError> {
        self.call("compose/generate", principal, dto).await
    }

    async fn list_concepts(&self, principal: &Principal) -> Result<Value, ServiceError> {
        self.call("compose/list-concepts", principal, json!({})).await
    }

    async fn accept_suggestion(
        &self,
        principal: &Principal,
        suggestion_id: Uuid,
    ) -> Result<Value, ServiceError> {
        self.call(
            "compose/accept-suggestion",
            principal,
            json!({ "suggestion_id": suggestion_id }),
        )
        .await
    }
}
