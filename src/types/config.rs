use serde::{Deserialize, Serialize};

/// Application configuration, persisted as a JSON file by the config engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the catalog metadata API.
    pub api_base_url: String,
    /// Bearer token presented to the catalog metadata API.
    pub api_token: String,
    /// Directory holding locally cached data such as genre lists.
    pub cache_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.themoviedb.org/3".to_string(),
            api_token: String::new(),
            cache_dir: ".cineshelf".to_string(),
        }
    }
}
