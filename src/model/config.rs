use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::category::{FALLBACK_CATEGORY, default_categories};

/// Configuration from config.toml. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub categories: CategoryConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the storage slots. Absent = XDG data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Category list used when none has been stored yet
    #[serde(default = "default_categories")]
    pub defaults: Vec<String>,
    /// Category assigned to tasks whose category is deleted
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        CategoryConfig {
            defaults: default_categories(),
            fallback: default_fallback(),
        }
    }
}

fn default_fallback() -> String {
    FALLBACK_CATEGORY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// flexi_logger spec, e.g. "info" or "chore=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Heading shown at the top of the TUI
    #[serde(default = "default_title")]
    pub title: String,
    /// Hex color overrides keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: default_title(),
            colors: HashMap::new(),
        }
    }
}

fn default_title() -> String {
    "My TODO List".to_string()
}
