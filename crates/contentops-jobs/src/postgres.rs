//! Postgres-backed queue writing to a pg-boss style `<schema>.job` table.

use async_trait::async_trait;
use contentops_config::JobQueueConfig;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{JobError, JobQueue};

#[derive(Debug, Clone)]
pub struct PgJobQueue {
    pool: PgPool,
    schema: String,
}

impl PgJobQueue {
    /// Builds the pool without connecting; the first `send` opens a connection.
    pub fn connect_lazy(config: &JobQueueConfig) -> Result<Self, JobError> {
        let database_url = config.database_url.as_deref().ok_or_else(|| {
            JobError::NotConfigured("JOB_QUEUE_DATABASE_URL or DATABASE_URL must be set".to_string())
        })?;
        validate_schema(&config.schema)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .connect_lazy(database_url)?;

        Ok(Self::with_pool(pool, config.schema.clone()))
    }

    pub fn with_pool(pool: PgPool, schema: String) -> Self {
        Self { pool, schema }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }
}

#[async_trait]
impl JobQueue for PgJobQueue {
    async fn send(&self, name: &str, payload: serde_json::Value) -> Result<Uuid, JobError> {
        // Schema is validated at construction; identifiers cannot be bound.
        let sql = format!(
            "INSERT INTO {}.job (id, name, data) VALUES ($1, $2, $3) RETURNING id",
            self.schema
        );

        let (id,): (Uuid,) = sqlx::query_as(&sql)
            .bind(Uuid::new_v4())
            .bind(name)
            .bind(Json(payload))
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(job_id = %id, job = %name, "Job enqueued");
        Ok(id)
    }
}

fn validate_schema(schema: &str) -> Result<(), JobError> {
    let valid = !schema.is_empty()
        && schema.len() <= 63
        && schema
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && schema.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(JobError::NotConfigured(format!("invalid job queue schema: {schema:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_schema() {
        assert!(validate_schema("pgboss").is_ok());
        assert!(validate_schema("_jobs_v2").is_ok());
        assert!(validate_schema("").is_err());
        assert!(validate_schema("2fast").is_err());
        assert!(validate_schema("pgboss; DROP TABLE job").is_err());
    }

    #[test]
    fn test_missing_database_url() {
        let err = PgJobQueue::connect_lazy(&JobQueueConfig::default()).unwrap_err();
        assert!(matches!(err, JobError::NotConfigured(_)));
    }
}
