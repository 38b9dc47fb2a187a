//! Segmentation and tiered dictionary lookup for Chinese, Japanese and
//! Korean text, with a whitespace fallback for other languages.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use glossa_core::dictionary::Dictionary;
use glossa_core::language::LanguageProcessor;
use glossa_core::segment::WhitespaceProcessor;
use glossa_lang_chinese::ChineseProcessor;
use glossa_lang_japanese::JapaneseProcessor;
use glossa_lang_korean::KoreanProcessor;
use glossa_remote::{RemoteError, SpeechClient};
use glossa_resolver::{FileIndexSource, TieredResolver};
use serde::Serialize;

#[cfg(test)]
mod tests;

pub use glossa_config::Config;
pub use glossa_core::language::{ConjugationMatch, LanguageTag, Token};
pub use glossa_core::lookup::{ComponentCharacter, LookupResult, LookupSource, NO_DEFINITION};
pub use glossa_lang_japanese::FuriganaState;

/// A token with the result of looking it up
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedToken {
    pub token: Token,
    pub lookup: Option<LookupResult>,
    /// Why a token that resolved nowhere may lack an entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

/// Entry point wiring one processor and resolver per language
pub struct Glossa {
    config: Config,
    resolvers: Mutex<HashMap<LanguageTag, Arc<TieredResolver>>>,
    speech: SpeechClient,
}

impl Glossa {
    pub fn new(config: Config) -> Self {
        let speech = SpeechClient::new(config.remote.speech_url.clone());
        Self {
            config,
            resolvers: Mutex::new(HashMap::new()),
            speech,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolver for `language`, built on first use
    pub fn resolver(&self, language: &LanguageTag) -> Arc<TieredResolver> {
        let mut resolvers = match self.resolvers.lock() {
            Ok(resolvers) => resolvers,
            Err(poisoned) => poisoned.into_inner(),
        };
        let resolver = resolvers
            .entry(language.clone())
            .or_insert_with(|| Arc::new(build_resolver(&self.config, language)));
        Arc::clone(resolver)
    }

    /// Break text into tokens. Unsupported languages split on whitespace.
    pub fn segment(&self, text: &str, language: &LanguageTag) -> Vec<Token> {
        self.resolver(language).processor().segment(text)
    }

    /// Look up one surface form
    pub async fn resolve(&self, token: &str, language: &LanguageTag) -> Option<LookupResult> {
        self.resolver(language).resolve(token).await
    }

    /// Segment `text` and look up every token, each distinct surface once.
    /// Whitespace tokens are kept, without a lookup.
    pub async fn annotate(&self, text: &str, language: &LanguageTag) -> Vec<AnnotatedToken> {
        let resolver = self.resolver(language);
        let tokens = resolver.processor().segment(text);

        let surfaces: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let results: HashMap<String, Option<LookupResult>> =
            resolver.resolve_many(&surfaces).await.into_iter().collect();

        tokens
            .into_iter()
            .map(|token| {
                let lookup = results.get(&token.text).cloned().flatten();
                let hint = match &lookup {
                    None if !token.is_whitespace() => resolver.processor().miss_hint(&token.text),
                    _ => None,
                };
                AnnotatedToken { token, lookup, hint }
            })
            .collect()
    }

    /// Explanation to show when `token` resolved at no tier
    pub fn miss_hint(&self, token: &str, language: &LanguageTag) -> Option<&'static str> {
        self.resolver(language).processor().miss_hint(token)
    }

    /// Numbered pinyin with tone marks
    pub fn render_tone(pinyin: &str) -> String {
        glossa_lang_chinese::render_tone(pinyin)
    }

    pub fn should_show_furigana(word: &str, state: &FuriganaState) -> bool {
        state.should_show(word)
    }

    /// Spoken audio for `text`
    pub async fn synthesize(&self, text: &str, language: &LanguageTag) -> Result<Vec<u8>, RemoteError> {
        self.speech.synthesize(text, language).await
    }
}

impl Default for Glossa {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn build_resolver(config: &Config, language: &LanguageTag) -> TieredResolver {
    let segmentation = &config.segmentation;

    let (processor, embedded): (Arc<dyn LanguageProcessor>, Option<Arc<dyn Dictionary>>) = match language {
        LanguageTag::Chinese => {
            let processor = ChineseProcessor::with_config(segmentation);
            let embedded: Arc<dyn Dictionary> = processor.embedded();
            let processor: Arc<dyn LanguageProcessor> = Arc::new(processor);
            (processor, Some(embedded))
        }
        LanguageTag::Japanese => {
            let processor = JapaneseProcessor::with_config(segmentation);
            let embedded: Arc<dyn Dictionary> = processor.embedded();
            let processor: Arc<dyn LanguageProcessor> = Arc::new(processor);
            (processor, Some(embedded))
        }
        LanguageTag::Korean => {
            let processor = KoreanProcessor::with_config(segmentation);
            let embedded: Arc<dyn Dictionary> = processor.embedded();
            let processor: Arc<dyn LanguageProcessor> = Arc::new(processor);
            (processor, Some(embedded))
        }
        LanguageTag::Other(_) => {
            let processor: Arc<dyn LanguageProcessor> = Arc::new(WhitespaceProcessor::new(language.clone()));
            (processor, None)
        }
    };

    let mut resolver = TieredResolver::new(processor).with_breakdown(*language == LanguageTag::Chinese);

    if config.dictionary.embedded {
        if let Some(embedded) = embedded {
            resolver = resolver.with_embedded(embedded);
        }
    }

    if let Some(path) = config.dictionary.path_for(language.code()) {
        resolver = resolver.with_full_index(Arc::new(FileIndexSource::new(path)));
    }

    if let Some(remote) = glossa_remote::for_language(&config.remote, language) {
        resolver = resolver.with_remote(remote, config.remote.timeout());
    }

    tracing::debug!("Resolver ready for {}", language);
    resolver
}
