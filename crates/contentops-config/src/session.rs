//! Session cookie and token signing configuration.
//!
//! # Environment Variables
//!
//! - `SESSION_SECRET`: HMAC secret used to sign session tokens
//! - `SESSION_COOKIE_NAME`: Cookie carrying the session token (default: `contentops_session`)
//! - `SESSION_EXPIRY`: Session lifetime in seconds (default: 86400)

use std::env;

pub const DEFAULT_COOKIE_NAME: &str = "contentops_session";

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    pub cookie_name: String,
    pub expiry_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: "your-secret-key-change-in-production".to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            expiry_secs: 86400, // 1 day
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env::var("SESSION_SECRET").unwrap_or(defaults.secret),
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .ok()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or(defaults.cookie_name),
            expiry_secs: crate::parse_env("SESSION_EXPIRY").unwrap_or(defaults.expiry_secs),
        }
    }
}
