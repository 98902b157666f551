use async_trait::async_trait;
use serde_json::{Value, json};

use contentops_auth::Principal;
use contentops_core::ServiceError;

use crate::modules::catalog::model::ProductQuery;
use crate::upstream::UpstreamServices;

#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_products(
        &self,
        principal: &Principal,
        query: ProductQuery,
    ) -> Result<Value, ServiceError>;

    async fn get_product(&self, principal: &Principal, product_id: String)
    -> Result<Value, ServiceError>;
}

#[async_trait]
impl CatalogService for UpstreamServices {
    async fn list_products(
        &self,
        principal: &Principal,
        query: ProductQuery,
    ) -> Result<Value, ServiceError> {
        self.call("catalog/list-products", principal, query).await
    }

    async fn get_product(
        &self,
        principal: &Principal,
        product_id: String,
    ) -> Result<Value, ServiceError> {
        self.call("catalog/get-product", principal, json!({ "product_id": product_id }))
            .await
    }
}
