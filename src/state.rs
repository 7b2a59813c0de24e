use crate::config::AppConfig;
use sea_orm::DatabaseConnection;

/// Shared application state: the single database connection and the
/// resolved configuration.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
}
