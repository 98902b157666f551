//! # Contentops Auth
//!
//! Identity types and session token utilities.
//!
//! - [`principal`]: The authenticated request context ([`Principal`]) and [`Role`] flags
//! - [`claims`]: Claims embedded in the session token
//! - [`jwt`]: Session token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use contentops_auth::{create_session_token, verify_session_token, Principal};
//! use contentops_config::SessionConfig;
//!
//! let config = SessionConfig::from_env();
//! let token = create_session_token(&principal, &config)?;
//! let principal = Principal::from(verify_session_token(&token, &config)?);
//! ```

pub mod claims;
pub mod jwt;
pub mod principal;

// Re-export commonly used types at crate root
pub use claims::SessionClaims;
pub use jwt::{create_session_token, verify_session_token};
pub use principal::{Principal, Role, UnknownRole};
