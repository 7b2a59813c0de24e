use sea_orm::{DatabaseConnection, EntityTrait, Set, SqlErr};
use tracing::debug;

use super::dto::{join_runs_on, MonitorRequest, MonitorResponse};
use super::entity::monitor;
use crate::utils::error::AppError;

pub struct MonitorService;

impl MonitorService {
    /// Insert a new monitor. A duplicate `(name, plugin)` key is a
    /// conflict, not a silent overwrite.
    pub async fn create(db: &DatabaseConnection, req: &MonitorRequest) -> Result<(), AppError> {
        let active = monitor::ActiveModel {
            name: Set(req.name.clone()),
            plugin: Set(req.plugin.clone()),
            enabled: Set(req.enabled),
            frequency: Set(req.frequency),
            runs_on: Set(join_runs_on(&req.runs_on)),
            params: Set(req.params.clone()),
        };

        match monitor::Entity::insert(active).exec_without_returning(db).await {
            Ok(_) => {
                debug!("Monitor '{}/{}' created", req.plugin, req.name);
                Ok(())
            }
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::conflict(format!(
                    "monitor '{}/{}' already exists",
                    req.plugin, req.name
                ))),
                _ => Err(e.into()),
            },
        }
    }

    pub async fn find(
        db: &DatabaseConnection,
        plugin: &str,
        name: &str,
    ) -> Result<Option<monitor::Model>, AppError> {
        // Key tuple order follows the primary key definition (name, plugin)
        let model = monitor::Entity::find_by_id((name.to_owned(), plugin.to_owned()))
            .one(db)
            .await?;

        Ok(model)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<monitor::Model>, AppError> {
        let models = monitor::Entity::find().all(db).await?;

        Ok(models)
    }

    /// Update the mutable attributes of one monitor, addressed by its key.
    /// Callers must check existence first for a templated 404.
    pub async fn update(
        db: &DatabaseConnection,
        plugin: &str,
        name: &str,
        req: &MonitorRequest,
    ) -> Result<monitor::Model, AppError> {
        let active = monitor::ActiveModel {
            name: Set(name.to_owned()),
            plugin: Set(plugin.to_owned()),
            enabled: Set(req.enabled),
            frequency: Set(req.frequency),
            runs_on: Set(join_runs_on(&req.runs_on)),
            params: Set(req.params.clone()),
        };

        let updated = monitor::Entity::update(active).exec(db).await?;

        Ok(updated)
    }

    /// Returns false when no row matched the key.
    pub async fn remove(
        db: &DatabaseConnection,
        plugin: &str,
        name: &str,
    ) -> Result<bool, AppError> {
        let result = monitor::Entity::delete_by_id((name.to_owned(), plugin.to_owned()))
            .exec(db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Render all monitors as a multi-document YAML stream, the format
    /// the collector agents consume.
    pub async fn dump_config(db: &DatabaseConnection) -> Result<String, AppError> {
        let monitors = Self::list(db).await?;

        let mut docs = Vec::with_capacity(monitors.len());
        for model in monitors {
            let doc = serde_yaml::to_string(&MonitorResponse::from(model))
                .map_err(|e| AppError::internal_error(format!("config dump failed: {}", e)))?;
            docs.push(doc);
        }

        Ok(docs.join("---\n"))
    }
}
