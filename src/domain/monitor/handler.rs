use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use super::dto::{MonitorRequest, MonitorResponse};
use super::service::MonitorService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::DeleteResponse;

/// List all monitor definitions.
#[utoipa::path(
    get,
    path = "/api/monitors",
    responses(
        (status = 200, description = "All monitors", body = [MonitorResponse])
    ),
    tag = "Monitors"
)]
pub async fn list_monitors(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonitorResponse>>, AppError> {
    let monitors = MonitorService::list(&state.db).await?;

    Ok(Json(monitors.into_iter().map(Into::into).collect()))
}

/// Read a single monitor by plugin and name.
#[utoipa::path(
    get,
    path = "/api/monitors/{plugin}/{name}",
    params(
        ("plugin" = String, Path, description = "Plugin the monitor is bound to"),
        ("name" = String, Path, description = "Monitor name")
    ),
    responses(
        (status = 200, description = "Monitor found", body = MonitorResponse),
        (status = 404, description = "No such monitor", body = ErrorResponse)
    ),
    tag = "Monitors"
)]
pub async fn get_monitor(
    State(state): State<AppState>,
    Path((plugin, name)): Path<(String, String)>,
) -> Result<Json<MonitorResponse>, AppError> {
    let monitor = MonitorService::find(&state.db, &plugin, &name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("monitor '{}/{}' not found", plugin, name)))?;

    Ok(Json(monitor.into()))
}

/// Create a new monitor definition.
#[utoipa::path(
    post,
    path = "/api/monitors",
    request_body = MonitorRequest,
    responses(
        (status = 201, description = "Monitor created", body = MonitorResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 409, description = "Monitor already exists", body = ErrorResponse)
    ),
    tag = "Monitors"
)]
pub async fn create_monitor(
    State(state): State<AppState>,
    payload: Result<Json<MonitorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MonitorResponse>), AppError> {
    let Json(req) = payload?;
    req.validate()?;

    MonitorService::create(&state.db, &req).await?;

    let stored = MonitorService::find(&state.db, &req.plugin, &req.name)
        .await?
        .ok_or_else(|| {
            AppError::internal_error(format!(
                "monitor '{}/{}' vanished after insert",
                req.plugin, req.name
            ))
        })?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// Update an existing monitor.
///
/// Name and plugin in the body are overwritten by the path parameters, so
/// a monitor cannot be re-keyed through this route.
#[utoipa::path(
    put,
    path = "/api/monitors/{plugin}/{name}",
    params(
        ("plugin" = String, Path, description = "Plugin the monitor is bound to"),
        ("name" = String, Path, description = "Monitor name")
    ),
    request_body = MonitorRequest,
    responses(
        (status = 200, description = "Stored monitor record", body = MonitorResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 404, description = "No such monitor", body = ErrorResponse)
    ),
    tag = "Monitors"
)]
pub async fn update_monitor(
    State(state): State<AppState>,
    Path((plugin, name)): Path<(String, String)>,
    payload: Result<Json<MonitorRequest>, JsonRejection>,
) -> Result<Json<MonitorResponse>, AppError> {
    let existing = MonitorService::find(&state.db, &plugin, &name).await?;
    if existing.is_none() {
        return Err(AppError::not_found(format!(
            "monitor '{}/{}' not found",
            plugin, name
        )));
    }

    let Json(mut req) = payload?;
    req.name = name.clone();
    req.plugin = plugin.clone();
    req.validate()?;

    let stored = MonitorService::update(&state.db, &plugin, &name, &req).await?;

    Ok(Json(stored.into()))
}

/// Delete a monitor by plugin and name.
#[utoipa::path(
    delete,
    path = "/api/monitors/{plugin}/{name}",
    params(
        ("plugin" = String, Path, description = "Plugin the monitor is bound to"),
        ("name" = String, Path, description = "Monitor name")
    ),
    responses(
        (status = 200, description = "Deleted", body = DeleteResponse),
        (status = 404, description = "No such monitor", body = ErrorResponse)
    ),
    tag = "Monitors"
)]
pub async fn delete_monitor(
    State(state): State<AppState>,
    Path((plugin, name)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = MonitorService::remove(&state.db, &plugin, &name).await?;
    if !removed {
        return Err(AppError::not_found(format!(
            "monitor '{}/{}' not found",
            plugin, name
        )));
    }

    Ok(Json(DeleteResponse::new(format!(
        "monitor '{}/{}' was deleted successfully",
        plugin, name
    ))))
}

/// Dump every monitor as a multi-document YAML stream.
///
/// This is the config format the collector agents consume.
#[utoipa::path(
    get,
    path = "/api/monitors/config",
    responses(
        (status = 200, description = "YAML monitor configuration", body = String, content_type = "application/x-yaml")
    ),
    tag = "Monitors"
)]
pub async fn dump_config(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let yaml = MonitorService::dump_config(&state.db).await?;

    Ok(([(header::CONTENT_TYPE, "application/x-yaml")], yaml))
}
