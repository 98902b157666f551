//! # Contentops Core
//!
//! Core types, errors, and utilities for the contentops API.
//!
//! - [`errors`]: Application and service-layer error types with HTTP response conversion
//! - [`pagination`]: Pagination query parameters for list endpoints
//! - [`serde`]: Custom serde deserialization helpers for query strings
//!
//! # Example
//!
//! ```ignore
//! use contentops_core::{AppError, PaginationParams};
//!
//! let error = AppError::forbidden(anyhow::anyhow!("Editor role required"));
//!
//! let params = PaginationParams::default();
//! let limit = params.limit();
//! ```

pub mod errors;
pub mod pagination;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ServiceError};
pub use pagination::PaginationParams;
