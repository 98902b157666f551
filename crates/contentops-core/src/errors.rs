//! Error types shared by every layer of the API.
//!
//! [`AppError`] is what handlers and middleware return; it carries the HTTP
//! status next to the underlying cause and renders as `{"error": "..."}`.
//! Server errors never echo their cause to the client, they log it instead.
//!
//! [`ServiceError`] is what the external service layer reports. Any error
//! convertible into [`anyhow::Error`] (including [`ServiceError`]) turns into
//! a 500 [`AppError`] through `?`.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// Body returned for every [`AppError`].
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(message.into()))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow::anyhow!(message.into()))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::internal(anyhow::anyhow!(message.into()))
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        };

        (self.status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

/// Failure reported by the external service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{operation} responded with status {status}: {message}")]
    Upstream {
        operation: String,
        status: u16,
        message: String,
    },

    #[error("{operation} could not be reached: {source}")]
    Transport {
        operation: String,
        #[source]
        source: Error,
    },

    #[error("{operation} returned an unreadable response: {message}")]
    Decode { operation: String, message: String },

    #[error("failed to enqueue {job}: {source}")]
    Queue {
        job: String,
        #[source]
        source: Error,
    },
}

impl ServiceError {
    pub fn operation(&self) -> &str {
        match self {
            ServiceError::Upstream { operation, .. }
            | ServiceError::Transport { operation, .. }
            | ServiceError::Decode { operation, .. } => operation,
            ServiceError::Queue { job, .. } => job,
        }
    }
}
