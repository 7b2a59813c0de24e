use axum::{
    extract::{Path, State},
    Json,
};

use super::service::PluginService;
use crate::state::AppState;
use crate::utils::error::AppError;

/// List the names of all plugin descriptors on disk.
#[utoipa::path(
    get,
    path = "/api/plugins",
    responses(
        (status = 200, description = "Plugin names", body = [String])
    ),
    tag = "Plugins"
)]
pub async fn list_plugins(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let names = PluginService::list(&state.config.plugin_dir)?;

    Ok(Json(names))
}

/// Read one plugin descriptor, returned as JSON.
#[utoipa::path(
    get,
    path = "/api/plugins/{name}",
    params(("name" = String, Path, description = "Plugin descriptor name")),
    responses(
        (status = 200, description = "Parsed descriptor"),
        (status = 404, description = "No such plugin", body = ErrorResponse)
    ),
    tag = "Plugins"
)]
pub async fn get_plugin(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let descriptor = PluginService::read(&state.config.plugin_dir, &name)?;

    Ok(Json(descriptor))
}
