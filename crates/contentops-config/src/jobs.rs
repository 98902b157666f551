//! Background job queue storage.
//!
//! - `JOB_QUEUE_DATABASE_URL`: Postgres URL of the queue (falls back to `DATABASE_URL`)
//! - `JOB_QUEUE_SCHEMA`: Schema holding the `job` table (default: `pgboss`)
//! - `JOB_QUEUE_MAX_CONNECTIONS`: Pool size (default: 5)

use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobQueueConfig {
    pub database_url: Option<String>,
    pub schema: String,
    pub max_connections: u32,
}

impl Default for JobQueueConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            schema: "pgboss".to_string(),
            max_connections: 5,
        }
    }
}

impl JobQueueConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("JOB_QUEUE_DATABASE_URL")
                .or_else(|_| env::var("DATABASE_URL"))
                .ok(),
            schema: env::var("JOB_QUEUE_SCHEMA").unwrap_or(defaults.schema),
            max_connections: crate::parse_env("JOB_QUEUE_MAX_CONNECTIONS")
                .unwrap_or(defaults.max_connections),
        }
    }
}
