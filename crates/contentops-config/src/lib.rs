//! # Contentops Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`server`]: Listen address
//! - [`session`]: Session cookie and token signing
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`service`]: External service layer endpoint
//! - [`jobs`]: Background job queue storage
//!
//! Every struct exposes `from_env()`, falling back to development defaults
//! when a variable is unset or unparsable.
//!
//! # Example
//!
//! ```ignore
//! use contentops_config::{CorsConfig, SessionConfig};
//!
//! let session_config = SessionConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jobs;
pub mod server;
pub mod service;
pub mod session;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jobs::JobQueueConfig;
pub use server::ServerConfig;
pub use service::ServiceConfig;
pub use session::SessionConfig;

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
