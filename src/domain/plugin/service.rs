use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::utils::error::AppError;

const DESCRIPTOR_EXTENSION: &str = ".yaml";

/// Plugin descriptors are plain YAML files on disk; this service never
/// executes anything, it only lists and parses them.
pub struct PluginService;

impl PluginService {
    /// Names of all descriptors in the plugin directory, extension
    /// stripped, sorted for stable output.
    pub fn list(plugin_dir: &Path) -> Result<Vec<String>, AppError> {
        let entries = fs::read_dir(plugin_dir).map_err(|e| {
            AppError::internal_error(format!(
                "cannot read plugin directory '{}': {}",
                plugin_dir.display(),
                e
            ))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AppError::internal_error(e.to_string()))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if let Some(name) = file_name.strip_suffix(DESCRIPTOR_EXTENSION) {
                names.push(name.to_owned());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Parse one descriptor and hand it back as JSON.
    ///
    /// Names that could leave the plugin directory are treated the same
    /// as unknown plugins.
    pub fn read(plugin_dir: &Path, name: &str) -> Result<serde_json::Value, AppError> {
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(AppError::not_found(format!("plugin '{}' not found", name)));
        }

        let path = plugin_dir.join(format!("{}{}", name, DESCRIPTOR_EXTENSION));

        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("plugin '{}' not found", name))
            } else {
                AppError::internal_error(format!("cannot read plugin '{}': {}", name, e))
            }
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            AppError::internal_error(format!("invalid plugin descriptor '{}': {}", name, e))
        })
    }
}
