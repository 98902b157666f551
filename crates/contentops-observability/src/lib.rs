//! Contentops Observability
//!
//! - Structured logging and distributed tracing via OpenTelemetry
//! - Prometheus metrics
//! - HTTP request/response logging middleware
//!
//! Compiled in with the `observability` feature (default) and switched off at
//! runtime with `OBSERVABILITY_ENABLED=false`. Either way the crate exposes
//! the same functions, so callers never need `cfg` gates; without the feature
//! they fall back to console logging and no-op metrics.
//!
//! ```no_run
//! use contentops_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, is_observability_enabled, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_auth_denial, track_job_enqueued,
    track_service_failure,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_tracing() {
        crate::basic_logging::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    /// Placeholder so `init_metrics()` keeps the same shape without the feature.
    #[derive(Clone)]
    pub struct PrometheusHandle;

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_app(_handle: PrometheusHandle) -> Router {
        Router::new()
    }

    pub fn track_auth_denial(_reason: &str) {}
    pub fn track_job_enqueued(_job: &str) {}
    pub fn track_service_failure(_operation: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
