//! Location of the external service layer that owns all business logic.
//!
//! - `SERVICE_BASE_URL`: Base URL operations are forwarded to (default: `http://localhost:4000`)
//! - `SERVICE_TIMEOUT_SECS`: Per-call timeout (default: 30)

use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("SERVICE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: crate::parse_env("SERVICE_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}
