use async_trait::async_trait;
use serde_json::{Value, json};

use contentops_auth::Principal;
use contentops_core::ServiceError;

use crate::modules::accounts::model::{InviteMemberDto, UpdateAccountDto};
use crate::upstream::UpstreamServices;

/// Account and organization operations.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn get_account(&self, principal: &Principal) -> Result<Value, ServiceError>;

    async fn update_account(
        &self,
        principal: &Principal,
        dto: UpdateAccountDto,
    ) -> Result<Value, ServiceError>;

    async fn get_organization(&self, principal: &Principal) -> Result<Value, ServiceError>;

    async fn list_members(&self, principal: &Principal) -> Result<Value, ServiceError>;

    async fn invite_member(
        &self,
        principal: &Principal,
        dto: InviteMemberDto,
    ) -> Result<Value, ServiceError>;
}

#[async_trait]
impl AccountService for UpstreamServices {
    async fn get_account(&self, principal: &Principal) -> Result<Value, ServiceError> {
        self.call("accounts/get-account", principal, json!({})).await
    }

    async fn update_account(
        &self,
        principal: &Principal,
        dto: UpdateAccountDto,
    ) -> Result<Value, ServiceError> {
        self.call("accounts/update-account", principal, dto).await
    }

    async fn get_organization(&self, principal: &Principal) -> Result<Value, ServiceError> {
        self.call(
            "accounts/get-organization",
            principal,
            json!({ "organization_id": principal.organization_id }),
        )
        .await
    }

    async fn list_members(&self, principal: &Principal) -> Result<Value, ServiceError> {
        self.call(
            "accounts/list-members",
            principal,
            json!({ "organization_id": principal.organization_id }),
        )
        .await
    }

    async fn invite_member(
        &self,
        principal: &Principal,
        dto: InviteMemberDto,
    ) -> Result<Value, ServiceError> {
        self.call("accounts/invite-member", principal, dto).await
    }
}
