//! Configuration for the session identity module

use serde::Deserialize;

/// Session identity configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Feature flags for the module
    #[serde(default)]
    pub feature_flags: Vec<String>,

    /// Maximum accepted impersonation token length in bytes
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feature_flags: Vec::new(),
            max_token_length: default_max_token_length(),
        }
    }
}

fn default_max_token_length() -> usize {
    4096
}
