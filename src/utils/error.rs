use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::{ErrorResponse, MessageResponse};

#[derive(Debug)]
pub enum AppError {
    /// Nenhum arquivo foi carregado com sucesso até agora
    DatasetUnavailable,
    MalformedUpload(String),
    InvariantViolation(String),
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatasetUnavailable => write!(f, "No dataset has been loaded"),
            AppError::MalformedUpload(msg) => write!(f, "Malformed upload: {}", msg),
            AppError::InvariantViolation(msg) => write!(f, "Invariant violation: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatasetUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::MalformedUpload(_) => StatusCode::BAD_REQUEST,
            AppError::InvariantViolation(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            // Upload responses always speak in `message`
            AppError::MalformedUpload(_) => builder.json(MessageResponse {
                message: self.to_string(),
            }),
            _ => builder.json(ErrorResponse {
                error: self.to_string(),
            }),
        }
    }
}
