use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared, join_all};
use glossa_core::clean::{DefinitionBudget, clean_definition};
use glossa_core::dictionary::{Dictionary, DictionaryEntry, DictionaryIndex};
use glossa_core::language::{LanguageProcessor, LookupCandidate};
use glossa_core::lookup::{ComponentCharacter, LookupResult, LookupSource};
use glossa_core::preprocess::{DefaultPreprocessor, Preprocessor};
use glossa_remote::RemoteDictionary;
use tokio_util::sync::CancellationToken;

use crate::source::IndexSource;

pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(8);

/// Resolved surface forms remembered before the memo is reset
pub const DEFAULT_MEMO_CAPACITY: usize = 4096;

/// Background load of the full index, awaited by every first miss
type IndexLoad = Shared<BoxFuture<'static, Option<Arc<DictionaryIndex>>>>;

/// Resolves words against an embedded dictionary, then a full index loaded
/// on first miss, then a remote dictionary. The first tier with a hit wins.
///
/// The full index is loaded at most once. The load runs as its own task, so
/// concurrent first misses wait on the same load and a caller that gives up
/// early does not abandon it. A failed load leaves the tier disabled for the
/// lifetime of the resolver.
pub struct TieredResolver {
    processor: Arc<dyn LanguageProcessor>,
    embedded: Option<Arc<dyn Dictionary>>,
    full_source: Option<Arc<dyn IndexSource>>,
    full: OnceLock<IndexLoad>,
    remote: Option<Arc<dyn RemoteDictionary>>,
    remote_timeout: Duration,
    breakdown: bool,
    preprocessor: DefaultPreprocessor,
    hits: Mutex<HashMap<String, LookupResult>>,
    memo_capacity: usize,
}

impl TieredResolver {
    pub fn new(processor: Arc<dyn LanguageProcessor>) -> Self {
        Self {
            processor,
            embedded: None,
            full_source: None,
            full: OnceLock::new(),
            remote: None,
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
            breakdown: false,
            preprocessor: DefaultPreprocessor,
            hits: Mutex::new(HashMap::new()),
            memo_capacity: DEFAULT_MEMO_CAPACITY,
        }
    }

    pub fn with_embedded(mut self, dictionary: Arc<dyn Dictionary>) -> Self {
        self.embedded = Some(dictionary);
        self
    }

    pub fn with_full_index(mut self, source: Arc<dyn IndexSource>) -> Self {
        self.full_source = Some(source);
        self
    }

    pub fn with_remote(mut self, remote: Arc<dyn RemoteDictionary>, timeout: Duration) -> Self {
        self.remote = Some(remote);
        self.remote_timeout = timeout;
        self
    }

    /// Attach a per-character breakdown to multi-character hits
    pub fn with_breakdown(mut self, breakdown: bool) -> Self {
        self.breakdown = breakdown;
        self
    }

    /// Bound the hit memo; it is cleared once this many forms are remembered
    pub fn with_memo_capacity(mut self, capacity: usize) -> Self {
        self.memo_capacity = capacity;
        self
    }

    pub fn processor(&self) -> &Arc<dyn LanguageProcessor> {
        &self.processor
    }

    /// Whether the full index load has finished, successfully or not
    pub fn full_index_attempted(&self) -> bool {
        self.full.get().is_some_and(|load| load.peek().is_some())
    }

    /// Resolve one surface form. `None` when no tier knows it.
    pub async fn resolve(&self, token: &str) -> Option<LookupResult> {
        let query = self.preprocessor.process(token);
        if query.is_empty() {
            return None;
        }

        if let Some(hit) = self.cached(&query) {
            return Some(hit);
        }

        let candidates = self.processor.lookup_candidates(&query);
        let mut result = self.lookup_tiers(&candidates).await?;

        result.reading = self.processor.render_reading(&result.reading);
        result.definition = clean_definition(&result.definition, DefinitionBudget::Full);
        self.processor.supplement(&mut result);
        if self.breakdown && result.word.chars().count() > 1 {
            result.components = self.components(&result.word);
        }

        self.remember(query, &result);
        Some(result)
    }

    /// Resolve each distinct surface form once, concurrently. Results follow
    /// first appearance; whitespace-only tokens are skipped.
    pub async fn resolve_many<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<(String, Option<LookupResult>)> {
        let mut surfaces: Vec<&str> = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            if !token.trim().is_empty() && !surfaces.contains(&token) {
                surfaces.push(token);
            }
        }

        let results = join_all(surfaces.iter().map(|s| self.resolve(s))).await;
        surfaces.into_iter().map(str::to_string).zip(results).collect()
    }

    /// Like [`resolve`](Self::resolve), but gives up with a miss once `cancel` fires
    pub async fn resolve_cancellable(&self, token: &str, cancel: &CancellationToken) -> Option<LookupResult> {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Lookup for '{}' cancelled", token);
                None
            }
            result = self.resolve(token) => result,
        }
    }

    fn cached(&self, query: &str) -> Option<LookupResult> {
        self.memo().get(query).cloned()
    }

    fn remember(&self, query: String, result: &LookupResult) {
        if self.memo_capacity == 0 {
            return;
        }
        let mut hits = self.memo();
        if hits.len() >= self.memo_capacity && !hits.contains_key(&query) {
            tracing::debug!("Lookup memo full at {} entries, clearing", hits.len());
            hits.clear();
        }
        hits.insert(query, result.clone());
    }

    /// The memo only holds finished results, so a poisoned lock is still usable
    fn memo(&self) -> MutexGuard<'_, HashMap<String, LookupResult>> {
        self.hits.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn lookup_tiers(&self, candidates: &[LookupCandidate]) -> Option<LookupResult> {
        if let Some(embedded) = &self.embedded {
            if let Some(result) = lookup_local(embedded.as_ref(), candidates, LookupSource::Embedded) {
                return Some(result);
            }
        }

        if let Some(full) = self.full_index().await {
            if let Some(result) = lookup_local(full.as_ref(), candidates, LookupSource::FullDict) {
                return Some(result);
            }
        }

        let first = candidates.first()?;
        self.lookup_remote(first).await
    }

    /// The full index, loading it on first use
    async fn full_index(&self) -> Option<Arc<DictionaryIndex>> {
        let source = self.full_source.as_ref()?;
        let load = self.full.get_or_init(|| spawn_index_load(Arc::clone(source)));
        load.clone().await
    }

    async fn lookup_remote(&self, candidate: &LookupCandidate) -> Option<LookupResult> {
        let remote = self.remote.as_ref()?;

        match tokio::time::timeout(self.remote_timeout, remote.search(&candidate.query)).await {
            Ok(Ok(Some(entry))) => {
                let mut result = LookupResult::from_entry(&entry.into_entry(), LookupSource::RemoteApi);
                result.conjugation = candidate.conjugation.clone();
                Some(result)
            }
            Ok(Ok(None)) => {
                tracing::debug!("{} has no entry for '{}'", remote.metadata().name, candidate.query);
                None
            }
            Ok(Err(e)) => {
                tracing::warn!("{} lookup for '{}' failed: {}", remote.metadata().name, candidate.query, e);
                None
            }
            Err(_) => {
                tracing::warn!(
                    "{} lookup for '{}' timed out after {:?}",
                    remote.metadata().name,
                    candidate.query,
                    self.remote_timeout
                );
                None
            }
        }
    }

    /// Per-character entries from the embedded dictionary and, if it is
    /// already loaded, the full index. Never triggers a load.
    fn components(&self, word: &str) -> Vec<ComponentCharacter> {
        let full = self.full.get().and_then(|load| load.peek()).cloned().flatten();

        word.chars()
            .filter_map(|c| {
                let character = c.to_string();
                let entry = self
                    .embedded
                    .as_ref()
                    .and_then(|d| d.lookup_exact(&character))
                    .or_else(|| full.as_ref().and_then(|f| f.get(&character)))?;
                Some(self.component(character, entry))
            })
            .collect()
    }

    fn component(&self, character: String, entry: &DictionaryEntry) -> ComponentCharacter {
        ComponentCharacter {
            character,
            reading: self.processor.render_reading(&entry.reading),
            definition: clean_definition(&entry.definition(), DefinitionBudget::Breakdown),
        }
    }
}

/// Start loading the index on the blocking pool. The load keeps running
/// whether or not anyone is still waiting for it.
fn spawn_index_load(source: Arc<dyn IndexSource>) -> IndexLoad {
    let description = source.describe();
    tracing::info!("Loading full dictionary index from {}", description);
    let task = tokio::task::spawn_blocking(move || source.load());

    async move {
        match task.await {
            Ok(Ok(index)) => {
                tracing::info!("Full dictionary index ready: {} entries", index.len());
                Some(Arc::new(index))
            }
            Ok(Err(e)) => {
                tracing::warn!("Full dictionary {} unavailable: {}", description, e);
                None
            }
            Err(e) => {
                tracing::error!("Full dictionary load task failed: {}", e);
                None
            }
        }
    }
    .boxed()
    .shared()
}

/// Try each candidate against one dictionary
fn lookup_local(
    dictionary: &dyn Dictionary,
    candidates: &[LookupCandidate],
    source: LookupSource,
) -> Option<LookupResult> {
    candidates.iter().find_map(|candidate| {
        let entry = dictionary.lookup_exact(&candidate.query)?;
        let metadata = dictionary.metadata();
        tracing::debug!(
            "'{}' found in {} ({} entries) as {:?}",
            candidate.query,
            metadata.name,
            metadata.entry_count,
            source
        );
        let mut result = LookupResult::from_entry(entry, source);
        result.conjugation = candidate.conjugation.clone();
        Some(result)
    })
}
