//! Feature modules. Each one owns its DTOs (`model`), the trait describing
//! the external operations it delegates to (`service`), its handlers
//! (`controller`) and its routes (`router`).

pub mod accounts;
pub mod catalog;
pub mod compose;
pub mod listing_quality;
pub mod reviews;
pub mod session;
pub mod translations;
pub mod workflow;
