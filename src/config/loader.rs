// src/config/loader.rs
//! Layered configuration loader
//!
//! Built-in defaults are overlaid by each existing TOML file in order, then by
//! `STROKE_EVAL_*` environment variables, and the merged result is validated.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::{constants::{env as env_keys, paths}, EngineConfig};

/// Configuration loader
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    env_prefix: String,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
    #[error("Configuration parse error: {0}")]
    ParseError(String),
    #[error("Configuration validation errors: {}", .0.join("; "))]
    ValidationError(Vec<String>),
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl ConfigLoader {
    /// Create new configuration loader over the standard search paths
    pub fn new() -> Self {
        Self::with_paths(Self::discover_config_paths())
    }

    /// Create loader with custom paths, later paths taking precedence
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            config_paths: paths,
            env_prefix: env_keys::PREFIX.to_string(),
        }
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load a single file on top of the defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        Self::with_paths(vec![path.to_path_buf()]).load_engine_config()
    }

    /// Load engine configuration with validation
    pub fn load_engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut merged_config = toml::Value::try_from(&EngineConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        for config_path in &self.config_paths {
            match self.load_config_file(config_path) {
                Ok(file_config) => {
                    debug!(path = %config_path.display(), "merging configuration file");
                    self.merge_toml_values(&mut merged_config, file_config);
                }
                Err(ConfigError::FileNotFound(_)) => continue, // Skip missing optional files
                Err(e) => return Err(e),
            }
        }

        self.apply_environment_overrides(&mut merged_config);

        let config: EngineConfig = merged_config.try_into().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
        })?;

        config
            .validate_consistency()
            .map_err(ConfigError::ValidationError)?;

        Ok(config)
    }

    /// Export a configuration to file
    pub fn export_config<P: AsRef<Path>>(config: &EngineConfig, path: P) -> Result<(), ConfigError> {
        let toml_content =
            toml::to_string_pretty(config).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, toml_content)?;
        Ok(())
    }

    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    fn load_config_file<P: AsRef<Path>>(&self, path: P) -> Result<toml::Value, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: toml::Value = toml::from_str(&content)?;

        Ok(config)
    }

    fn merge_toml_values(&self, base: &mut toml::Value, overlay: toml::Value) {
        match (base, overlay) {
            (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
                for (key, value) in overlay_table {
                    if let Some(base_value) = base_table.get_mut(&key) {
                        self.merge_toml_values(base_value, value);
                    } else {
                        base_table.insert(key, value);
                    }
                }
            }
            (base_value, overlay_value) => {
                *base_value = overlay_value;
            }
        }
    }

    fn apply_environment_overrides(&self, config: &mut toml::Value) {
        for (key, value) in std::env::vars() {
            let Some(stripped) = key.strip_prefix(&self.env_prefix) else {
                continue;
            };

            let segments: Vec<String> = stripped
                .to_lowercase()
                .split(env_keys::SECTION_SEPARATOR)
                .map(str::to_string)
                .collect();

            if segments.iter().any(|s| s.is_empty()) {
                continue;
            }

            debug!(variable = %key, "applying environment override");
            self.set_nested_value(config, &segments, self.parse_env_value(&value));
        }
    }

    fn parse_env_value(&self, value: &str) -> toml::Value {
        if let Ok(int_val) = value.parse::<i64>() {
            toml::Value::Integer(int_val)
        } else if let Ok(float_val) = value.parse::<f64>() {
            toml::Value::Float(float_val)
        } else if let Ok(bool_val) = value.parse::<bool>() {
            toml::Value::Boolean(bool_val)
        } else {
            toml::Value::String(value.to_string())
        }
    }

    fn set_nested_value(&self, config: &mut toml::Value, path: &[String], value: toml::Value) {
        let mut current = config;

        for (i, part) in path.iter().enumerate() {
            let toml::Value::Table(table) = current else {
                return;
            };

            if i == path.len() - 1 {
                table.insert(part.clone(), value);
                return;
            }

            current = table
                .entry(part.clone())
                .or_insert_with(|| toml::Value::Table(toml::value::Table::new()));
        }
    }

    fn discover_config_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from(paths::SYSTEM_CONFIG_PATH),
            PathBuf::from(paths::DEFAULT_CONFIG_FILE),
            PathBuf::from(paths::LOCAL_CONFIG_FILE),
        ]
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
