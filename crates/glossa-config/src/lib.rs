use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::remote::RemoteConfig;
use self::segmentation::SegmentationConfig;

pub mod dictionary;
pub mod remote;
pub mod segmentation;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub remote: RemoteConfig,
    pub segmentation: SegmentationConfig,
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            remote: RemoteConfig::new(),
            segmentation: SegmentationConfig::new(),
        }
    }

    /// Load a JSON profile. Missing sections and fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

pub(crate) fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

pub(crate) fn env_list(name: &str) -> Vec<String> {
    env::var(name)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
