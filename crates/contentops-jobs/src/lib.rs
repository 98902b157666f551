//! # Contentops Jobs
//!
//! Handle to the background job queue that long-running work (page
//! translation) is handed off to.
//!
//! The queue lives outside this process; handlers only enqueue. The handle
//! is initialize-once: the first caller constructs the queue client and
//! stores it, every later caller reuses it, and there is no teardown path.
//! A failed construction is not stored, so the next caller retries.
//!
//! # Example
//!
//! ```ignore
//! use contentops_config::JobQueueConfig;
//! use contentops_jobs::JobQueueHandle;
//!
//! let jobs = JobQueueHandle::postgres(JobQueueConfig::from_env());
//! let job_id = jobs.send("translate-page", serde_json::json!({ "page_id": "home" })).await?;
//! ```

pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use contentops_config::JobQueueConfig;
use once_cell::sync::OnceCell;
use uuid::Uuid;

pub use postgres::PgJobQueue;

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("job queue is not configured: {0}")]
    NotConfigured(String),

    #[error("job queue database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Enqueues a job and returns its id.
    async fn send(&self, name: &str, payload: serde_json::Value) -> Result<Uuid, JobError>;
}

type Factory = dyn Fn() -> Result<Arc<dyn JobQueue>, JobError> + Send + Sync;

/// Lazily constructed, shared job queue client.
#[derive(Clone)]
pub struct JobQueueHandle {
    cell: Arc<OnceCell<Arc<dyn JobQueue>>>,
    factory: Arc<Factory>,
}

impl JobQueueHandle {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn JobQueue>, JobError> + Send + Sync + 'static,
    {
        Self {
            cell: Arc::new(OnceCell::new()),
            factory: Arc::new(factory),
        }
    }

    /// Handle backed by the Postgres `job` table; the pool connects on first use.
    pub fn postgres(config: JobQueueConfig) -> Self {
        Self::new(move || {
            let queue = PgJobQueue::connect_lazy(&config)?;
            tracing::info!(schema = %queue.schema(), "Job queue initialized");
            Ok(Arc::new(queue) as Arc<dyn JobQueue>)
        })
    }

    /// Returns the queue, constructing it if this is the first call.
    pub fn get(&self) -> Result<Arc<dyn JobQueue>, JobError> {
        self.cell.get_or_try_init(|| (self.factory)()).cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub async fn send(&self, name: &str, payload: serde_json::Value) -> Result<Uuid, JobError> {
        self.get()?.send(name, payload).await
    }
}
