//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid listen port: {0}")]
    InvalidPort(String),
}

/// Failure from the data access layer. Connectivity, constraint violations and
/// timeouts all land here; callers only ever see a generic message.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{public}")]
    Store {
        public: String,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure with the message the route exposes to callers.
    pub fn store(public: impl Into<String>, source: StoreError) -> Self {
        AppError::Store {
            public: public.into(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "message": message })),
            )
                .into_response(),
            AppError::Store { public, source } => {
                // Full detail stays in the server log; the client gets the generic message.
                tracing::error!(error = %source, "falha no acesso ao banco de dados");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": public })),
                )
                    .into_response()
            }
        }
    }
}
