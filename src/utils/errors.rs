//! Errores de la aplicación
//!
//! Este módulo define los errores de la capa HTTP y su conversión a JSON.
//! El modelo de comparación nunca falla; estos cubren peticiones erróneas y
//! problemas de arranque.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::sections::UnknownSectionError;
use crate::models::vehicle::UnknownFieldError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<UnknownFieldError> for AppError {
    fn from(e: UnknownFieldError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<UnknownSectionError> for AppError {
    fn from(e: UnknownSectionError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: "VALIDATION_ERROR".to_string(),
                    },
                )
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: "NOT_FOUND".to_string(),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: "BAD_REQUEST".to_string(),
                    },
                )
            }

            AppError::Config(msg) | AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: "INTERNAL_ERROR".to_string(),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Error 404 para una columna inexistente
pub fn column_not_found(index: usize) -> AppError {
    AppError::NotFound(format!("Column {} does not exist", index))
}
