use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ErrorResponse;

/// Application-wide error type.
///
/// Every handler returns `Result<_, AppError>`; the `IntoResponse` impl
/// turns the variant into an HTTP status plus an `{"error": ...}` body.
#[derive(Debug)]
pub enum AppError {
    #[allow(dead_code)]
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    ValidationError(String),
    JsonParseFailed(String),
    InternalError(String),
}

impl AppError {
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::JsonParseFailed(msg) => format!("invalid request body: {}", msg),
            AppError::InternalError(msg) => msg.clone(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        match &self {
            AppError::InternalError(_) => {
                error!("Internal server error: {}", message);
            }
            _ => {
                error!("Request failed [{}]: {}", status, message);
            }
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            sea_orm::DbErr::RecordNotUpdated => {
                AppError::NotFound("record not found".to_string())
            }
            other => AppError::InternalError(format!("database error: {}", other)),
        }
    }
}

/// Convenience constructors
impl AppError {
    #[allow(dead_code)]
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        AppError::InternalError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_should_map_to_404() {
        let err = AppError::not_found("collector 'web-01' not found");

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "collector 'web-01' not found");
    }

    #[test]
    fn conflict_should_map_to_409() {
        let err = AppError::conflict("monitor 'ping/local' already exists");

        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_error_should_map_to_400() {
        let err = AppError::ValidationError("frequency must be at least 1".to_string());

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn json_parse_error_message_should_mention_request_body() {
        let err = AppError::JsonParseFailed("EOF while parsing".to_string());

        assert!(err.message().contains("invalid request body"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
