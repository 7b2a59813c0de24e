use std::env;
use std::path::PathBuf;

/// Directory the SQLite database file lives in, created on startup.
pub const DATA_PATH: &str = "data";

/// Application configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_file: String,
    pub plugin_dir: PathBuf,
}

impl AppConfig {
    /// Load the configuration from the environment, falling back to the
    /// defaults of the original mntr server.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("MNTR_SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_file = env::var("MNTR_SERVER_DB").unwrap_or_else(|_| "mntr.db".to_string());

        let plugin_dir = env::var("MNTR_PLUGIN_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("plugins"));

        Ok(Self {
            server_port,
            database_file,
            plugin_dir,
        })
    }

    /// sea-orm connection URL for the database file under `data/`.
    ///
    /// `mode=rwc` creates the file on first startup.
    pub fn database_url(&self) -> String {
        format!("sqlite://{}/{}?mode=rwc", DATA_PATH, self.database_file)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_should_point_into_data_dir() {
        let config = AppConfig {
            server_port: 8000,
            database_file: "mntr.db".to_string(),
            plugin_dir: PathBuf::from("plugins"),
        };

        assert_eq!(config.database_url(), "sqlite://data/mntr.db?mode=rwc");
    }

    #[test]
    fn config_error_should_describe_invalid_port() {
        assert_eq!(ConfigError::InvalidPort.to_string(), "Invalid port number");
    }
}
