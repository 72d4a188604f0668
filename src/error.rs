use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Document packaging error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    pub fn log_safe(&self) -> String {
        match self {
            // Parser errors may echo back arbitrary catalog contents
            Error::Yaml(_) => "Catalog YAML could not be parsed".to_string(),
            Error::Json(_) => "JSON could not be processed".to_string(),
            Error::Io(_) => "File system operation failed".to_string(),
            Error::Zip(_) => "Document packaging failed".to_string(),

            Error::Internal(msg) => {
                if msg.to_lowercase().contains("password")
                    || msg.to_lowercase().contains("secret")
                    || msg.to_lowercase().contains("token")
                    || msg.to_lowercase().contains("key")
                {
                    "Internal error (details redacted)".to_string()
                } else {
                    format!("Internal error: {msg}")
                }
            }

            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::NotFound(msg) => format!("Not found: {msg}"),
            Error::Validation(msg) => format!("Validation error: {msg}"),
            Error::Export(msg) => format!("Export error: {msg}"),
        }
    }

    /// Status code reported to HTTP clients
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Level a request failure is logged at; client-side misses are routine
    pub fn log_level(&self) -> tracing::Level {
        match self {
            Error::NotFound(_) => tracing::Level::DEBUG,
            Error::Validation(_) => tracing::Level::WARN,
            _ => tracing::Level::ERROR,
        }
    }
}

// Implement IntoResponse for API error handling
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.log_level() {
            tracing::Level::DEBUG => tracing::debug!("Request error: {}", self.log_safe()),
            tracing::Level::WARN => tracing::warn!("Request error: {}", self.log_safe()),
            _ => tracing::error!("Request error: {}", self.log_safe()),
        }

        let status = self.status_code();
        let error_message = match &self {
            Error::NotFound(msg) | Error::Validation(msg) => msg.clone(),
            Error::Export(_) | Error::Zip(_) => "Document export failed".to_string(),
            _ => "Internal server error".to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
