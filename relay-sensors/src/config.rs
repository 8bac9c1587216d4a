//! Configuration for the sensor allowlist.

use relay_common::{LoggingConfig, SensorId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::allowlist::{Allowlist, SENSOR_IDS_ENV};
use crate::routing::check_required;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] json5::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Complete relay configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Sensor allowlist settings
    #[serde(default)]
    pub sensors: SensorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Sensor allowlist settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorsConfig {
    /// Allowlist override in `ID[:publish]` form, e.g. "33:0,34".
    ///
    /// The `BYD_HASS_SENSOR_IDS` environment variable takes precedence.
    #[serde(default)]
    pub sensor_ids: Option<String>,

    /// IDs that downstream sinks need polled (may be poll-only)
    #[serde(default)]
    pub required_ids: Vec<SensorId>,
}

impl RelayConfig {
    /// Load configuration from a JSON5 file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: RelayConfig = json5::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// The override string itself is never rejected: bad tokens are dropped
    /// when the allowlist is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(id) = self.sensors.required_ids.iter().find(|id| **id < 0) {
            return Err(ConfigError::Validation(format!(
                "required_ids: sensor ID {} must not be negative",
                id
            )));
        }

        Ok(())
    }

    /// Pick the override string: `env_value` if set and non-empty, otherwise
    /// the `sensors.sensor_ids` file setting.
    pub fn sensor_ids_source(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|value| !value.is_empty())
            .or_else(|| self.sensors.sensor_ids.clone())
    }

    /// Build the allowlist, reading the override from the environment.
    pub fn allowlist(&self) -> Allowlist {
        self.allowlist_with_env(std::env::var(SENSOR_IDS_ENV).ok())
    }

    /// Build the allowlist with an explicit environment value.
    pub fn allowlist_with_env(&self, env_value: Option<String>) -> Allowlist {
        let source = self.sensor_ids_source(env_value);
        let allowlist = Allowlist::load(source.as_deref());

        info!(
            polled = allowlist.len(),
            published = allowlist.published_sensor_ids().len(),
            default_table = allowlist.is_default(),
            "Sensor allowlist loaded"
        );

        check_required(&allowlist, &self.sensors.required_ids);
        allowlist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            sensors: {
                sensor_ids: "33:0,34",
                required_ids: [33, 2],
            },
            logging: { level: "debug" },
        }"#;

        let config: RelayConfig = json5::from_str(json).unwrap();
        config.validate().unwrap();

        assert_eq!(config.sensors.sensor_ids.as_deref(), Some("33:0,34"));
        assert_eq!(config.sensors.required_ids, vec![33, 2]);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: RelayConfig = json5::from_str("{}").unwrap();

        assert!(config.sensors.sensor_ids.is_none());
        assert!(config.sensors.required_ids.is_empty());
        assert_eq!(config.logging.level, "info");
        assert!(config.allowlist_with_env(None).is_default());
    }

    #[test]
    fn test_validate_negative_required_id() {
        let json = r#"{ sensors: { required_ids: [33, -1] } }"#;

        let config: RelayConfig = json5::from_str(json).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_malformed_override_is_not_a_validation_error() {
        let json = r#"{ sensors: { sensor_ids: "abc,def" } }"#;

        let config: RelayConfig = json5::from_str(json).unwrap();
        config.validate().unwrap();
        assert!(config.allowlist_with_env(None).is_default());
    }

    #[test]
    fn test_env_overrides_file() {
        let config = RelayConfig {
            sensors: SensorsConfig {
                sensor_ids: Some("1,2".to_string()),
                required_ids: Vec::new(),
            },
            ..Default::default()
        };

        let allowlist = config.allowlist_with_env(Some("12:0,34".to_string()));
        assert_eq!(allowlist.poll_sensor_ids(), vec![12, 34]);
        assert_eq!(allowlist.published_sensor_ids(), vec![34]);
    }

    #[test]
    fn test_empty_env_defers_to_file() {
        let config = RelayConfig {
            sensors: SensorsConfig {
                sensor_ids: Some("5:0".to_string()),
                required_ids: Vec::new(),
            },
            ..Default::default()
        };

        assert_eq!(
            config.sensor_ids_source(Some(String::new())).as_deref(),
            Some("5:0")
        );
        assert_eq!(config.sensor_ids_source(None).as_deref(), Some("5:0"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = RelayConfig::load_from_file("/nonexistent/relay.json5");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
