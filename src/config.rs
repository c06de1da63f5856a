use crate::domain::error::WorkerError;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_ROOT: &str = "/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerConfig {
    /// URL opened when a notification is clicked and no window exists.
    pub app_root: String,
    /// Forwarded to `clients.matchAll`.
    pub include_uncontrolled: bool,
    /// Log every handled event.
    pub debug: bool,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            app_root: DEFAULT_APP_ROOT.to_string(),
            include_uncontrolled: false,
            debug: false,
        }
    }
}

impl WorkerConfig {
    pub fn validate(&self) -> Result<(), WorkerError> {
        if self.app_root.trim().is_empty() {
            return Err(WorkerError::invalid_config("appRoot must not be empty"));
        }
        Ok(())
    }
}

static CONFIG: Lazy<RwLock<WorkerConfig>> = Lazy::new(|| RwLock::new(WorkerConfig::default()));

/// Snapshot of the current configuration.
pub fn config() -> WorkerConfig {
    CONFIG.read().clone()
}

pub fn set_config(config: WorkerConfig) -> Result<(), WorkerError> {
    config.validate()?;
    *CONFIG.write() = config;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = WorkerConfig::default();
        assert_eq!(config.app_root, "/");
        assert!(!config.include_uncontrolled);
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_object_fills_defaults() {
        let config: WorkerConfig = serde_json::from_value(json!({ "debug": true })).unwrap();
        assert!(config.debug);
        assert_eq!(config.app_root, DEFAULT_APP_ROOT);
    }

    #[test]
    fn test_camel_case_fields() {
        let config: WorkerConfig = serde_json::from_value(json!({
            "appRoot": "/chat",
            "includeUncontrolled": true
        }))
        .unwrap();
        assert_eq!(config.app_root, "/chat");
        assert!(config.include_uncontrolled);
    }

    #[test]
    fn test_empty_app_root_rejected() {
        let config = WorkerConfig {
            app_root: "  ".to_string(),
            ..WorkerConfig::default()
        };
        assert_eq!(
            set_config(config),
            Err(WorkerError::invalid_config("appRoot must not be empty"))
        );
    }
}
