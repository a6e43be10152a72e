use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::registry::RegistryError;

/// Fixed body returned for every unhandled failure.
pub const UNHANDLED_MESSAGE: &str = "Algo de errado não está certo";

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    InternalError(String),
    NotFound(String),
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Erro de configuração: {}", msg),
            AppError::InternalError(msg) => write!(f, "Erro interno: {}", msg),
            AppError::NotFound(msg) => write!(f, "Não encontrado: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Requisição inválida: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(_) => AppError::NotFound(err.user_message().to_string()),
            RegistryError::InvalidInput => AppError::BadRequest(err.user_message().to_string()),
            RegistryError::EmptyRegistry => AppError::InternalError(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, UNHANDLED_MESSAGE)
            }
            AppError::InternalError(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, UNHANDLED_MESSAGE)
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
