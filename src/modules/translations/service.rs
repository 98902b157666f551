use async_trait::async_trait;
use serde_json::{Value, json};

use contentops_auth::Principal;
use contentops_core::ServiceError;

use crate::modules::translations::model::TranslatePageDto;
use crate::upstream::UpstreamServices;

/// Page translation and localization.
#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn languages(&self, principal: &Principal) -> Result<Value, ServiceError>;

    /// Registers the translation request; the work itself runs as a
    /// background job.
    async fn translate_page(
        &self,
        principal: &Principal,
        dto: &TranslatePageDto,
    ) -> Result<Value, ServiceError>;

    async fn page_status(&self, principal: &Principal, page_id: String)
    -> Result<Value, ServiceError>;
}

#[async_trait]
impl TranslationService for UpstreamServices {
    async fn languages(&self, principal: &Principal) -> Result<Value, ServiceError> {
        self.call("translations/languages", principal, json!({})).await
    }

    async fn translate_page(
        &self,
        principal: &Principal,
        dto: &TranslatePageDto,
    ) -> Result<Value, ServiceError> {
        self.call("translations/translate-page", principal, dto).await
    }

    async fn page_status(
        &self,
        principal: &Principal,
        page_id: String,
    ) -> Result<Value, ServiceError> {
        self.call("translations/page-status", principal, json!({ "page_id": page_id }))
            .await
    }
}
