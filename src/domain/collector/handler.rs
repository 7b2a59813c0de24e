use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use validator::Validate;

use super::dto::{CollectorRequest, CollectorResponse};
use super::service::CollectorService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::DeleteResponse;

/// List all registered collectors.
#[utoipa::path(
    get,
    path = "/api/collectors",
    responses(
        (status = 200, description = "All collectors", body = [CollectorResponse])
    ),
    tag = "Collectors"
)]
pub async fn list_collectors(
    State(state): State<AppState>,
) -> Result<Json<Vec<CollectorResponse>>, AppError> {
    let collectors = CollectorService::list(&state.db).await?;

    Ok(Json(collectors.into_iter().map(Into::into).collect()))
}

/// Read a single collector by hostname.
#[utoipa::path(
    get,
    path = "/api/collectors/{hostname}",
    params(("hostname" = String, Path, description = "Collector hostname")),
    responses(
        (status = 200, description = "Collector found", body = CollectorResponse),
        (status = 404, description = "No such collector", body = ErrorResponse)
    ),
    tag = "Collectors"
)]
pub async fn get_collector(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
) -> Result<Json<CollectorResponse>, AppError> {
    let collector = CollectorService::find(&state.db, &hostname)
        .await?
        .ok_or_else(|| AppError::not_found(format!("collector '{}' not found", hostname)))?;

    Ok(Json(collector.into()))
}

/// Register a collector, or refresh it if the hostname already exists.
///
/// Acts as the agent heartbeat: `lastSeen` is always stamped server-side.
#[utoipa::path(
    post,
    path = "/api/collectors",
    request_body = CollectorRequest,
    responses(
        (status = 200, description = "Stored collector record", body = CollectorResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse)
    ),
    tag = "Collectors"
)]
pub async fn create_collector(
    State(state): State<AppState>,
    payload: Result<Json<CollectorRequest>, JsonRejection>,
) -> Result<Json<CollectorResponse>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let stored = CollectorService::upsert(&state.db, &req.hostname, &req.version).await?;

    Ok(Json(stored.into()))
}

/// Update an existing collector.
///
/// The hostname in the body is overwritten by the path parameter, so a
/// collector cannot be renamed through this route.
#[utoipa::path(
    put,
    path = "/api/collectors/{hostname}",
    params(("hostname" = String, Path, description = "Collector hostname")),
    request_body = CollectorRequest,
    responses(
        (status = 200, description = "Stored collector record", body = CollectorResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 404, description = "No such collector", body = ErrorResponse)
    ),
    tag = "Collectors"
)]
pub async fn update_collector(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
    payload: Result<Json<CollectorRequest>, JsonRejection>,
) -> Result<Json<CollectorResponse>, AppError> {
    let existing = CollectorService::find(&state.db, &hostname).await?;
    if existing.is_none() {
        return Err(AppError::not_found(format!(
            "collector '{}' not found",
            hostname
        )));
    }

    let Json(mut req) = payload?;
    req.hostname = hostname;
    req.validate()?;

    let stored = CollectorService::upsert(&state.db, &req.hostname, &req.version).await?;

    Ok(Json(stored.into()))
}

/// Delete a collector by hostname.
#[utoipa::path(
    delete,
    path = "/api/collectors/{hostname}",
    params(("hostname" = String, Path, description = "Collector hostname")),
    responses(
        (status = 200, description = "Deleted", body = DeleteResponse),
        (status = 404, description = "No such collector", body = ErrorResponse)
    ),
    tag = "Collectors"
)]
pub async fn delete_collector(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = CollectorService::remove(&state.db, &hostname).await?;
    if !removed {
        return Err(AppError::not_found(format!(
            "collector '{}' not found",
            hostname
        )));
    }

    Ok(Json(DeleteResponse::new(format!(
        "collector '{}' was deleted successfully",
        hostname
    ))))
}
