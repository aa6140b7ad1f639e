//! Configuration for the settings engine module

use serde::Deserialize;

/// Settings engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Feature flags for the module
    #[serde(default)]
    pub feature_flags: Vec<String>,

    /// Warn when a key is not namespaced by its category
    #[serde(default = "default_true")]
    pub strict_key_namespacing: bool,

    /// Maximum setting value size in bytes (JSON-encoded)
    #[serde(default = "default_max_value_size")]
    pub max_value_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feature_flags: Vec::new(),
            strict_key_namespacing: true,
            max_value_size: default_max_value_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_value_size() -> usize {
    64 * 1024 // 64 KiB
}
