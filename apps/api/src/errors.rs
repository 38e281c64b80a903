use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mailer::MailError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Server-side failures are logged here with full detail; the caller only
/// ever sees a generic message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Email relay credentials are not configured")]
    MailNotConfigured,

    #[error("Email delivery failed: {0}")]
    Delivery(#[from] MailError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::MailNotConfigured => {
                tracing::error!("Email environment variables are not set (EMAIL_USER, EMAIL_PASS)");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Email service not configured. Please contact the administrator.",
                        "details": "Missing environment variables"
                    }),
                )
            }
            AppError::Delivery(e) => {
                tracing::error!("Email sending error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to send message. Please try again later.",
                        "details": e.details()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
