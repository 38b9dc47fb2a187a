use std::env;

use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_embedded() -> bool {
    true
}

/// Where the dictionaries of each tier come from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Use the curated dictionaries compiled into the binary
    #[serde(default = "default_embedded")]
    pub embedded: bool,
    /// Full index artifacts, loaded on first embedded-tier miss
    pub chinese_path: Option<String>,
    pub japanese_path: Option<String>,
    pub korean_path: Option<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            embedded: default_embedded(),
            chinese_path: None,
            japanese_path: None,
            korean_path: None,
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            embedded: env_flag("GLOSSA_EMBEDDED_DICT").unwrap_or_else(default_embedded),
            chinese_path: env::var("GLOSSA_ZH_DICT").ok(),
            japanese_path: env::var("GLOSSA_JA_DICT").ok(),
            korean_path: env::var("GLOSSA_KO_DICT").ok(),
        }
    }

    pub fn path_for(&self, language_code: &str) -> Option<&str> {
        match language_code {
            "zh" => self.chinese_path.as_deref(),
            "ja" => self.japanese_path.as_deref(),
            "ko" => self.korean_path.as_deref(),
            _ => None,
        }
    }
}
