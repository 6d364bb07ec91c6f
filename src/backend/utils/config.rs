//! Application configuration.

use crate::backend::utils::paths::get_config_path;
use crate::utils::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const URL_ENV: &str = "AI_STUDIO_SUPABASE_URL";
pub const ANON_KEY_ENV: &str = "AI_STUDIO_SUPABASE_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public anon key sent as `apikey` on every request.
    pub anon_key: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast_duration_ms: u64,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:54321".to_string(),
            anon_key: String::new(),
            request_timeout_secs: 30,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
            language: "ar".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `config.json` from the app directory and applies environment
    /// overrides. A missing file is created with the defaults; an unreadable
    /// one yields the defaults.
    pub fn load() -> Self {
        let path = get_config_path();
        let fresh = !path.exists();
        let mut config = Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("Using default configuration: {e}");
            Self::default()
        });
        if fresh && let Err(e) = config.save_to(&path) {
            log::warn!("Failed to write default configuration: {e}");
        }
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Overrides backend settings from `lookup`, which is the process
    /// environment outside of tests. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.backend.url = url.trim().to_string();
        }
        if let Some(key) = lookup(ANON_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.backend.anon_key = key.trim().to_string();
        }
    }
}
