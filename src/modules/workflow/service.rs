use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use contentops_auth::Principal;
use contentops_core::ServiceError;

use crate::modules::workflow::model::{CompleteItemDto, SavePageWorkflowItemDto, StopAutomationDto};
use crate::upstream::UpstreamServices;

/// Content review pipelines.
#[async_trait]
pub trait WorkflowService: Send + Sync {
    async fn stop_automation(
        &self,
        principal: &Principal,
        dto: StopAutomationDto,
    ) -> Result<Value, ServiceError>;

    async fn complete_item(
        &self,
        principal: &Principal,
        dto: CompleteItemDto,
    ) -> Result<Value, ServiceError>;

    async fn save_page_workflow_item(
        &self,
        principal: &Principal,
        dto: SavePageWorkflowItemDto,
    ) -> Result<Value, ServiceError>;

    async fn list_items(&self, principal: &Principal, workflow_id: Uuid)
    -> Result<Value, ServiceError>;
}

#[async_trait]
impl WorkflowService for UpstreamServices {
    async fn stop_automation(
        &self,
        principal: &Principal,
        dto: StopAutomationDto,
    ) -> Result<Value, ServiceError> {
        self.call("workflow/stop-automation", principal, dto).await
    }

    async fn complete_item(
        &self,
        principal: &Principal,
        dto: CompleteItemDto,
    ) -> Result<Value, ServiceError> {
        self.call("workflow/complete-item", principal, dto).await
    }

    async fn save_page_workflow_item(
        &self,
        principal: &Principal,
        dto: SavePageWorkflowItemDto,
    ) -> Result<Value, ServiceError> {
        self.call("workflow/save-page-workflow-item", principal, dto)
            .await
    }

    async fn list_items(
        &self,
        principal: &Principal,
        workflow_id: Uuid,
    ) -> Result<Value, ServiceError> {
        self.call("workflow/list-items", principal, json!({ "workflow_id": workflow_id }))
            .await
    }
}
