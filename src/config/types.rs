use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub routes: RoutesConfig,
    pub theme: ThemeConfig,
}

/// Where persistent session state lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// State directory. `None` uses `<data_dir>/dealerdesk`.
    pub dir: Option<PathBuf>,
    /// Prefix of every persistent key (e.g. `dealerdesk.cart`).
    pub namespace: String,
    /// Optional byte quota for the state directory.
    pub quota_bytes: Option<u64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            namespace: "dealerdesk".to_string(),
            quota_bytes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Screen shown for keys that resolve to nothing.
    pub fallback: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            fallback: "home".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Default of the persisted dark-mode preference.
    pub dark_by_default: bool,
}
