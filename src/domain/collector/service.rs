use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::debug;

use super::entity::collector;
use crate::utils::error::AppError;

pub struct CollectorService;

impl CollectorService {
    /// Create or refresh a collector row.
    ///
    /// `lastSeen` is stamped here on every call, even when the client
    /// supplied one; a repeat POST for the same hostname acts as a
    /// heartbeat and overwrites version and timestamp.
    pub async fn upsert(
        db: &DatabaseConnection,
        hostname: &str,
        version: &str,
    ) -> Result<collector::Model, AppError> {
        let last_seen = Utc::now().timestamp_millis();

        let active = collector::ActiveModel {
            hostname: Set(hostname.to_owned()),
            version: Set(version.to_owned()),
            last_seen: Set(last_seen),
        };

        collector::Entity::insert(active)
            .on_conflict(
                OnConflict::column(collector::Column::Hostname)
                    .update_columns([collector::Column::Version, collector::Column::LastSeen])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        debug!("Collector '{}' seen at {}", hostname, last_seen);

        Self::find(db, hostname).await?.ok_or_else(|| {
            AppError::internal_error(format!("collector '{}' vanished after upsert", hostname))
        })
    }

    pub async fn find(
        db: &DatabaseConnection,
        hostname: &str,
    ) -> Result<Option<collector::Model>, AppError> {
        let model = collector::Entity::find_by_id(hostname.to_owned())
            .one(db)
            .await?;

        Ok(model)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<collector::Model>, AppError> {
        let models = collector::Entity::find().all(db).await?;

        Ok(models)
    }

    /// Returns false when no row matched the hostname.
    pub async fn remove(db: &DatabaseConnection, hostname: &str) -> Result<bool, AppError> {
        let result = collector::Entity::delete_by_id(hostname.to_owned())
            .exec(db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
