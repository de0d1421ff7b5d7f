// CineShelf Config Engine
// Manages application configuration: loading, saving, and resetting to
// defaults. Configuration is stored as a JSON file.

use std::fs;
use std::path::Path;

use crate::types::config::AppConfig;
use crate::types::errors::ConfigError;

/// Trait defining the config engine interface.
pub trait ConfigEngineTrait {
    fn load(&mut self) -> Result<AppConfig, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn config(&self) -> &AppConfig;
    fn set_config(&mut self, config: AppConfig) -> Result<(), ConfigError>;
    fn reset(&mut self) -> Result<(), ConfigError>;
    fn config_path(&self) -> &str;
}

/// Config engine implementation that persists configuration as JSON on disk.
pub struct ConfigEngine {
    config_path: String,
    config: AppConfig,
}

impl ConfigEngine {
    /// Creates a new ConfigEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses `config.json` under the user's config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => Self::default_config_path(),
        };

        Self {
            config_path,
            config: AppConfig::default(),
        }
    }

    fn default_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => Path::new(&home)
                .join(".config")
                .join("cineshelf")
                .join("config.json")
                .to_string_lossy()
                .to_string(),
            Err(_) => "cineshelf-config.json".to_string(),
        }
    }
}

impl ConfigEngineTrait for ConfigEngine {
    /// Loads configuration from the JSON config file.
    ///
    /// If the file does not exist, returns default configuration.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<AppConfig, ConfigError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.config = AppConfig::default();
            return Ok(self.config.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;

        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.config = config;
        Ok(self.config.clone())
    }

    /// Saves the current configuration to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), ConfigError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.config)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;

        fs::write(path, json)
            .map_err(|e| ConfigError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the current in-memory configuration.
    fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replaces the configuration and saves it to disk.
    fn set_config(&mut self, config: AppConfig) -> Result<(), ConfigError> {
        self.config = config;
        self.save()
    }

    /// Resets the configuration to defaults and saves to disk.
    fn reset(&mut self) -> Result<(), ConfigError> {
        self.config = AppConfig::default();
        self.save()
    }

    /// Returns the path to the config file.
    fn config_path(&self) -> &str {
        &self.config_path
    }
}
