//! Session/identity resolution.
//!
//! The resolver is the only place that knows how a session is carried; the
//! gates downstream only see `Option<Principal>`.

use async_trait::async_trait;
use axum::http::{header, request::Parts};
use axum_extra::extract::cookie::CookieJar;

use contentops_auth::{Principal, verify_session_token};
use contentops_config::SessionConfig;
use contentops_core::AppError;

#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// `Ok(None)` means the request is unauthenticated. `Err` is reserved
    /// for failures of the resolver itself.
    async fn resolve(&self, parts: &Parts) -> Result<Option<Principal>, AppError>;
}

/// Resolves the principal from the signed session cookie, falling back to
/// an `Authorization: Bearer` token for non-browser clients.
#[derive(Debug, Clone)]
pub struct JwtSessionResolver {
    config: SessionConfig,
}

impl JwtSessionResolver {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    fn session_token(&self, parts: &Parts) -> Option<String> {
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(&self.config.cookie_name) {
            let value = cookie.value().trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }

        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

#[async_trait]
impl SessionResolver for JwtSessionResolver {
    async fn resolve(&self, parts: &Parts) -> Result<Option<Principal>, AppError> {
        let Some(token) = self.session_token(parts) else {
            return Ok(None);
        };

        match verify_session_token(&token, &self.config) {
            Ok(claims) => Ok(Some(Principal::from(claims))),
            Err(e) => {
                tracing::debug!(error = %e.error, "Ignoring invalid session token");
                Ok(None)
            }
        }
    }
}
