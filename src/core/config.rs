use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://devradar.dev/api/v1";
pub const CONFIG_FILE: &str = ".devradar.yml";
pub const API_URL_ENV: &str = "DEVRADAR_API_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Config::default();
        }
        match std::fs::read_to_string(&config_path) {
            Ok(content) => match serde_yaml::from_str::<Config>(&content) {
                Ok(config) => {
                    debug!("Loaded config from {}", config_path.display());
                    config
                }
                Err(err) => {
                    warn!("Ignoring {}: {}", config_path.display(), err);
                    Config::default()
                }
            },
            Err(err) => {
                warn!("Could not read {}: {}", config_path.display(), err);
                Config::default()
            }
        }
    }

    /// Apply the value of `DEVRADAR_API_URL`, which wins over the file.
    pub fn with_env_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = Some(url);
        }
        self
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
