use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use simplify_engine::ClientSettings;
use simplify_logging::{simplify_info, simplify_warn};

/// Default config file looked up next to the working directory.
pub const CONFIG_FILENAME: &str = ".simplify.ron";

/// Host configuration. Every field has a default, so an absent or partial
/// config file is fine. Nothing is ever written back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimplifyConfig {
    /// Cleaning-service endpoint receiving the `{"html": ...}` POST.
    pub endpoint: String,
    /// Debounce before the one-shot prefetch fires.
    pub prefetch_delay_ms: u64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
    /// Extension-local page hosting the voice-agent panel.
    pub panel_page: String,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/clean_html".to_string(),
            prefetch_delay_ms: 1000,
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
            max_response_bytes: 5 * 1024 * 1024,
            panel_page: "panel.html".to_string(),
        }
    }
}

impl SimplifyConfig {
    pub fn prefetch_delay(&self) -> Duration {
        Duration::from_millis(self.prefetch_delay_ms)
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
        }
    }
}

/// Loads the config from a RON file, falling back to defaults when the file
/// is absent or malformed.
pub fn load(path: &Path) -> SimplifyConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return SimplifyConfig::default();
        }
        Err(err) => {
            simplify_warn!("Failed to read config from {:?}: {}", path, err);
            return SimplifyConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            simplify_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            simplify_warn!("Failed to parse config from {:?}: {}", path, err);
            SimplifyConfig::default()
        }
    }
}
