use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// Format:
/// ```json
/// { "error": "monitor 'ping/local' not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Confirmation body returned by the DELETE endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub msg: String,
}

impl DeleteResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
