//! HTTP client for the external service layer.
//!
//! Every operation is forwarded as `POST {base_url}/{domain}/{operation}`
//! with the body `{"principal": ..., "params": ...}`; the upstream JSON
//! response is handed back untouched. The per-domain traits in
//! `modules::*::service` are implemented on [`UpstreamServices`].

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use contentops_auth::Principal;
use contentops_config::ServiceConfig;
use contentops_core::ServiceError;
use contentops_observability::track_service_failure;

#[derive(Serialize)]
struct Envelope<'a, P> {
    principal: &'a Principal,
    params: P,
}

#[derive(Debug, Clone)]
pub struct UpstreamServices {
    client: Client,
    base_url: String,
}

impl UpstreamServices {
    pub fn new(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, operation: &str) -> String {
        format!("{}/{}", self.base_url, operation)
    }

    /// Forwards one operation on behalf of `principal`.
    pub async fn call<P>(
        &self,
        operation: &str,
        principal: &Principal,
        params: P,
    ) -> Result<Value, ServiceError>
    where
        P: Serialize + Send + Sync,
    {
        let result = self.send(operation, principal, params).await;
        if let Err(e) = &result {
            error!(operation, error = %e, "Service call failed");
            track_service_failure(operation);
        }
        result
    }

    async fn send<P>(
        &self,
        operation: &str,
        principal: &Principal,
        params: P,
    ) -> Result<Value, ServiceError>
    where
        P: Serialize + Send + Sync,
    {
        let url = self.url(operation);
        debug!(%url, "Forwarding to service layer");

        let response = self
            .client
            .post(&url)
            .json(&Envelope { principal, params })
            .send()
            .await
            .map_err(|e| ServiceError::Transport {
                operation: operation.to_string(),
                source: e.into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Upstream {
                operation: operation.to_string(),
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ServiceError::Decode {
                operation: operation.to_string(),
                message: e.to_string(),
            })
    }
}

/// Picks the human-readable part of an upstream error body.
fn upstream_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error", "err", "message"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no response body".to_string();
    }
    trimmed.chars().take(200).collect()
}
