use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};

/// Environment variable holding inline YAML configuration.
pub const CONFIG_ENV: &str = "GREETER_CONFIG";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GreeterConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set.
    pub filter: String,
    pub with_target: bool,
    /// CloudWatch stamps ingestion time already, so this is off by default.
    pub with_time: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "greeter_core=info,bootstrap=info".to_string(),
            with_target: false,
            with_time: false,
        }
    }
}

pub fn load_config(config_path: Option<&str>) -> Result<GreeterConfig> {
    let config = match config_path {
        Some(path) => GreeterConfig::from_file(path)?,
        None => GreeterConfig::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

impl GreeterConfig {
    pub fn from_file(path: &str) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            origin: path.to_string(),
            error: Box::new(e),
        })?;
        Self::from_yaml(&content, path)
    }

    /// Reads [`CONFIG_ENV`]; an unset variable yields the defaults.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(config_str) => Self::from_yaml(&config_str, CONFIG_ENV),
            Err(_) => Ok(Self::default()),
        }
    }

    fn from_yaml(content: &str, origin: &str) -> std::result::Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::LoadFailed {
            origin: origin.to_string(),
            error: Box::new(e),
        })
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.telemetry.filter.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "telemetry filter cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
