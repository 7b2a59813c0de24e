pub mod app_config;
pub mod database;

pub use app_config::{AppConfig, ConfigError, DATA_PATH};
pub use database::establish_connection;
