use axum::Json;

use super::dto::StatusResponse;
use super::service::uptime_secs;

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Server is alive", body = StatusResponse)
    ),
    tag = "Status"
)]
pub async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        alive: true,
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: uptime_secs(),
    })
}
