use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation failed")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone(), None),
            AppError::Invalid(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed".into(),
                serde_json::to_value(errors).ok(),
            ),
            AppError::Database(e) => match constraint_message(e) {
                Some(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, None),
                None => {
                    tracing::error!(error = %e, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".into(),
                        None,
                    )
                }
            },
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });
        if let Some(details) = details {
            body["error"]["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

/// Constraint violations (missing referenced pet, duplicate link) are client
/// errors carrying the store's message; everything else stays a 500.
fn constraint_message(e: &sqlx::Error) -> Option<String> {
    match e {
        sqlx::Error::Database(db) => match db.kind() {
            sqlx::error::ErrorKind::ForeignKeyViolation
            | sqlx::error::ErrorKind::UniqueViolation
            | sqlx::error::ErrorKind::NotNullViolation
            | sqlx::error::ErrorKind::CheckViolation => Some(db.message().to_string()),
            _ => None,
        },
        _ => None,
    }
}

pub type AppResult<T> = Result<T, AppError>;
