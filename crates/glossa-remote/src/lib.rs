use std::sync::Arc;

use glossa_config::remote::RemoteConfig;
use glossa_core::dictionary::DictionaryEntry;
use glossa_core::language::LanguageTag;

pub mod chain;
pub mod chinese;
pub mod jisho;
pub mod korean;
pub mod speech;
pub mod wiktionary;

pub use chain::FallbackChain;
pub use chinese::ChineseSearchClient;
pub use jisho::JishoClient;
pub use korean::KoreanDictClient;
pub use speech::SpeechClient;
pub use wiktionary::WiktionaryClient;

/// Online dictionary interface
#[async_trait::async_trait]
pub trait RemoteDictionary: Send + Sync {
    /// Best entry for `query`, `None` when the service knows no such word
    async fn search(&self, query: &str) -> Result<Option<RemoteEntry>, RemoteError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Entry returned by a remote dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteEntry {
    pub headword: String,
    pub reading: String,
    pub glosses: Vec<String>,
    pub part_of_speech: Vec<String>,
    pub notes: Vec<String>,
    pub examples: Vec<String>,
}

impl RemoteEntry {
    pub fn into_entry(self) -> DictionaryEntry {
        DictionaryEntry {
            headword: self.headword,
            reading: self.reading,
            glosses: self.glosses,
            part_of_speech: self.part_of_speech,
            notes: self.notes,
            examples: self.examples,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

/// Map a non-success status to an error
pub(crate) fn check_status(status: reqwest::StatusCode) -> Result<(), RemoteError> {
    match status.as_u16() {
        429 => Err(RemoteError::RateLimitExceeded),
        401 | 403 => Err(RemoteError::AuthenticationError),
        _ if !status.is_success() => Err(RemoteError::Status(status.as_u16())),
        _ => Ok(()),
    }
}

/// Remote tier for a language, `None` when remote lookups are disabled
pub fn for_language(config: &RemoteConfig, language: &LanguageTag) -> Option<Arc<dyn RemoteDictionary>> {
    if !config.enabled {
        return None;
    }

    let remote: Arc<dyn RemoteDictionary> = match language {
        LanguageTag::Japanese => Arc::new(JishoClient::new(config.jisho_url.clone())),
        LanguageTag::Chinese => Arc::new(ChineseSearchClient::new(config.chinese_url.clone())),
        LanguageTag::Korean => {
            let mut chain = FallbackChain::new();
            if let Some(url) = &config.korean_dict_url {
                chain.push(Arc::new(KoreanDictClient::new(
                    url.clone(),
                    config.korean_dict_api_key.clone(),
                )));
            }
            chain.push(Arc::new(WiktionaryClient::new(config.wiktionary_url.clone(), "ko")));
            Arc::new(chain)
        }
        LanguageTag::Other(code) => Arc::new(WiktionaryClient::new(config.wiktionary_url.clone(), code)),
    };

    tracing::debug!("Remote dictionary for {}: {}", language, remote.metadata().name);
    Some(remote)
}
