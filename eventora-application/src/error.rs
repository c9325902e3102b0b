use anyhow::anyhow;
use thiserror::Error;

use eventora_domain::{DomainError, GatewayError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unexpected response from server: {0}")]
    Schema(String),
    #[error("server rejected the request ({status}): {message}")]
    Backend { status: u16, message: String },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<GatewayError> for AppError {
    fn from(value: GatewayError) -> Self {
        match value {
            GatewayError::Unauthorized => AppError::Unauthorized,
            GatewayError::NotFound(what) => AppError::NotFound(what),
            GatewayError::Schema(message) => AppError::Schema(message),
            GatewayError::Api { status, message } => AppError::Backend { status, message },
            GatewayError::Transport(message) => AppError::Internal(anyhow!("request failed: {message}")),
            GatewayError::Storage(message) => AppError::Internal(anyhow!("local storage: {message}")),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(value: DomainError) -> Self {
        AppError::BadRequest(value.to_string())
    }
}
