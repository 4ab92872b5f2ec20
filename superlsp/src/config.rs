//! Server configuration
//!
//! Resolution, lowest to highest: defaults, TOML file (`serve --config`),
//! command-line flags, then the client's `initializationOptions`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LspError, Result};
use crate::signature::ParamScan;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    /// How far signature help counts commas for the active parameter
    pub active_parameter_scan: ParamScan,
    /// Tracing filter directive used when no `--log-level` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Partial settings layered over a base config
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub active_parameter_scan: Option<ParamScan>,
    pub log_level: Option<String>,
}

impl ServerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| LspError::config(e.to_string()))
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let source =
            std::fs::read_to_string(path).map_err(|e| LspError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&source)
    }

    /// Layer explicit overrides on top of this config
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(scan) = overrides.active_parameter_scan {
            self.active_parameter_scan = scan;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = Some(level);
        }
        self
    }

    /// Apply LSP `initializationOptions`. `null` leaves the config unchanged.
    pub fn with_init_options(self, options: &serde_json::Value) -> Result<Self> {
        if options.is_null() {
            return Ok(self);
        }
        let overrides = ConfigOverrides::deserialize(options)
            .map_err(|e| LspError::config(format!("invalid initializationOptions: {e}")))?;
        Ok(self.with_overrides(overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.active_parameter_scan, ParamScan::Cursor);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_toml_file() {
        let config = ServerConfig::from_toml_str(
            "activeParameterScan = \"document\"\nlogLevel = \"superlsp=debug\"\n",
        )
        .unwrap();
        assert_eq!(config.active_parameter_scan, ParamScan::Document);
        assert_eq!(config.log_level.as_deref(), Some("superlsp=debug"));
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_toml_rejects_unknown_scan() {
        let err = ServerConfig::from_toml_str("activeParameterScan = \"sideways\"").unwrap_err();
        assert!(matches!(err, LspError::Config { .. }));
    }

    #[test]
    fn test_init_options_override() {
        let base = ServerConfig {
            active_parameter_scan: ParamScan::Document,
            log_level: Some("info".to_string()),
        };
        let config = base
            .clone()
            .with_init_options(&json!({ "activeParameterScan": "cursor" }))
            .unwrap();
        assert_eq!(config.active_parameter_scan, ParamScan::Cursor);
        assert_eq!(config.log_level.as_deref(), Some("info"));

        assert_eq!(base.clone().with_init_options(&serde_json::Value::Null).unwrap(), base);
        assert!(base.with_init_options(&json!({ "activeParameterScan": 3 })).is_err());
    }
}
