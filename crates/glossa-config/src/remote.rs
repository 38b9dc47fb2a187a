use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_flag;

/// Remote dictionary and speech endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    /// Per-call timeout, after which the call counts as a miss
    pub timeout_ms: u64,
    pub jisho_url: String,
    /// Korean dictionary endpoint; queried before Wiktionary when set
    pub korean_dict_url: Option<String>,
    pub korean_dict_api_key: Option<String>,
    pub wiktionary_url: String,
    pub chinese_url: String,
    pub speech_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: 8000,
            jisho_url: "https://jisho.org/api/v1/search/words".to_string(),
            korean_dict_url: None,
            korean_dict_api_key: None,
            wiktionary_url: "https://en.wiktionary.org/api/rest_v1/page/definition".to_string(),
            chinese_url: "https://api.peteryang.net/chinese-dictionary/search".to_string(),
            speech_url: "https://translate.google.com/translate_tts".to_string(),
        }
    }
}

impl RemoteConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let timeout_ms = env::var("GLOSSA_REMOTE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_ms);

        Self {
            enabled: env_flag("GLOSSA_REMOTE_ENABLED").unwrap_or(defaults.enabled),
            timeout_ms,
            jisho_url: env::var("GLOSSA_JISHO_URL").unwrap_or(defaults.jisho_url),
            korean_dict_url: env::var("GLOSSA_KOREAN_DICT_URL").ok(),
            korean_dict_api_key: env::var("GLOSSA_KOREAN_DICT_API_KEY").ok(),
            wiktionary_url: env::var("GLOSSA_WIKTIONARY_URL").unwrap_or(defaults.wiktionary_url),
            chinese_url: env::var("GLOSSA_CHINESE_URL").unwrap_or(defaults.chinese_url),
            speech_url: env::var("GLOSSA_SPEECH_URL").unwrap_or(defaults.speech_url),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
