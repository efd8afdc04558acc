use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::model::MapType;

/// localStorage key holding the JSON config.
pub const STORAGE_KEY: &str = "gps_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix for service paths; empty means same origin.
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u32,
    #[serde(default = "default_width")]
    pub default_width: u32,
    #[serde(default = "default_height")]
    pub default_height: u32,
    #[serde(default)]
    pub default_map_type: MapType,
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,
    #[serde(default = "default_max_brush_size")]
    pub max_brush_size: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default values
fn default_request_timeout_ms() -> u32 { 10_000 }
fn default_width() -> u32 { 50 }
fn default_height() -> u32 { 50 }
fn default_brush_size() -> u32 { 1 }
fn default_max_brush_size() -> u32 { 10 }
fn default_log_level() -> String { "info".to_string() }

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            request_timeout_ms: default_request_timeout_ms(),
            default_width: default_width(),
            default_height: default_height(),
            default_map_type: MapType::default(),
            default_brush_size: default_brush_size(),
            max_brush_size: default_max_brush_size(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse stored config: {}; using defaults", e);
                ClientConfig::default()
            }
        }
    }

    /// Reads the stored config, or defaults when absent.
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
        match stored {
            Some(raw) => Self::from_json(&raw),
            None => {
                info!("No stored config, using defaults");
                ClientConfig::default()
            }
        }
    }

    pub fn save(&self) {
        let Some(store) = web_sys::window().and_then(|win| win.local_storage().ok().flatten()) else {
            return;
        };
        match serde_json::to_string(self) {
            Ok(s) => {
                if store.set_item(STORAGE_KEY, &s).is_err() {
                    warn!("Could not persist config");
                }
            }
            Err(e) => warn!("Could not encode config: {}", e),
        }
    }

    /// Remembers the parameters of the last created map.
    pub fn with_last_map(&self, width: u32, height: u32, map_type: MapType) -> Self {
        Self {
            default_width: width,
            default_height: height,
            default_map_type: map_type,
            ..self.clone()
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
