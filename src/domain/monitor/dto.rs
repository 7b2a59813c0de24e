use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::entity::monitor;

/// Separator used for the `runsOn` column.
pub const RUNS_ON_SEPARATOR: &str = ",";

/// Monitor definition body for POST and PUT.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitorRequest {
    /// Check name, unique together with `plugin`
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "ping-local")]
    pub name: String,
    /// Plugin the check is bound to, by convention a plugin descriptor name
    #[validate(length(min = 1, message = "plugin must not be empty"))]
    #[schema(example = "ping")]
    pub plugin: String,
    pub enabled: bool,
    /// Hostnames the check runs on; not required to match any collector
    #[validate(
        length(min = 1, message = "runsOn must contain at least one hostname"),
        custom(function = validate_runs_on)
    )]
    pub runs_on: Vec<String>,
    /// Run interval in seconds
    #[validate(range(min = 1, message = "frequency must be at least 1 second"))]
    #[schema(example = 30)]
    pub frequency: i32,
    /// Opaque YAML blob handed to the plugin unparsed
    #[serde(default)]
    pub params: String,
}

fn validate_runs_on(runs_on: &[String]) -> Result<(), ValidationError> {
    if runs_on.iter().any(|host| host.trim().is_empty()) {
        let mut err = ValidationError::new("runs_on");
        err.message = Some("runsOn entries must not be empty".into());
        return Err(err);
    }
    // The column is comma-delimited, so a comma inside an entry would
    // silently split it into two hostnames on read-back
    if runs_on.iter().any(|host| host.contains(RUNS_ON_SEPARATOR)) {
        let mut err = ValidationError::new("runs_on");
        err.message = Some("runsOn entries must not contain ','".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitorResponse {
    pub name: String,
    pub plugin: String,
    pub enabled: bool,
    pub runs_on: Vec<String>,
    pub frequency: i32,
    pub params: String,
}

impl From<monitor::Model> for MonitorResponse {
    fn from(model: monitor::Model) -> Self {
        Self {
            name: model.name,
            plugin: model.plugin,
            enabled: model.enabled,
            runs_on: split_runs_on(&model.runs_on),
            frequency: model.frequency,
            params: model.params,
        }
    }
}

/// Column value for a `runsOn` list.
pub fn join_runs_on(runs_on: &[String]) -> String {
    runs_on.join(RUNS_ON_SEPARATOR)
}

/// List form of a stored `runsOn` column. Empty columns yield an empty
/// list rather than one empty hostname.
pub fn split_runs_on(column: &str) -> Vec<String> {
    column
        .split(RUNS_ON_SEPARATOR)
        .filter(|host| !host.is_empty())
        .map(str::to_owned)
        .collect()
}
