// Configuration type definitions

use serde::Deserialize;

use crate::stats::Stattext;

/// Engine selection section (`[default]`)
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Registry name of the statistics engine
    #[serde(default = "default_driver")]
    pub driver: String,
    /// Precision used when the command line does not give one
    #[serde(default)]
    pub precision: Option<u32>,
}

fn default_driver() -> String {
    Stattext::NAME.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            driver: default_driver(),
            precision: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub default: EngineConfig,
}
