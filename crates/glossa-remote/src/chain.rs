use std::sync::Arc;

use async_trait::async_trait;

use crate::{ProviderMetadata, RemoteDictionary, RemoteEntry, RemoteError};

/// Queries providers in order until one has the word
#[derive(Default, Clone)]
pub struct FallbackChain {
    providers: Vec<Arc<dyn RemoteDictionary>>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, provider: Arc<dyn RemoteDictionary>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl RemoteDictionary for FallbackChain {
    /// A failing provider is logged and skipped. The error is only returned
    /// when every provider failed.
    async fn search(&self, query: &str) -> Result<Option<RemoteEntry>, RemoteError> {
        let mut last_error = None;
        let mut answered = false;

        for provider in &self.providers {
            match provider.search(query).await {
                Ok(Some(entry)) => return Ok(Some(entry)),
                Ok(None) => answered = true,
                Err(e) => {
                    tracing::warn!("{} lookup for '{}' failed: {}", provider.metadata().name, query, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if !answered => Err(e),
            _ => Ok(None),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self
                .providers
                .iter()
                .map(|p| p.metadata().name)
                .collect::<Vec<_>>()
                .join(" > "),
            requires_api_key: self.providers.iter().any(|p| p.metadata().requires_api_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    enum Behavior {
        Hit(&'static str),
        Miss,
        Fail,
    }

    struct FakeProvider {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl RemoteDictionary for FakeProvider {
        async fn search(&self, query: &str) -> Result<Option<RemoteEntry>, RemoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Hit(gloss) => Ok(Some(RemoteEntry {
                    headword: query.to_string(),
                    glosses: vec![gloss.to_string()],
                    ..Default::default()
                })),
                Behavior::Miss => Ok(None),
                Behavior::Fail => Err(RemoteError::Status(503)),
            }
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "fake".to_string(),
                requires_api_key: false,
            }
        }
    }

    #[tokio::test]
    async fn test_first_hit_wins() {
        let failing = FakeProvider::new(Behavior::Fail);
        let hit = FakeProvider::new(Behavior::Hit("school"));
        let unused = FakeProvider::new(Behavior::Hit("other"));

        let mut chain = FallbackChain::new();
        chain.push(failing.clone());
        chain.push(hit.clone());
        chain.push(unused.clone());

        let entry = chain.search("학교").await.unwrap().unwrap();
        assert_eq!(entry.glosses, vec!["school"]);
        assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
        assert_eq!(unused.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_miss_beats_error() {
        let mut chain = FallbackChain::new();
        chain.push(FakeProvider::new(Behavior::Miss));
        chain.push(FakeProvider::new(Behavior::Fail));
        assert!(chain.search("x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_all_failed() {
        let mut chain = FallbackChain::new();
        chain.push(FakeProvider::new(Behavior::Fail));
        assert!(matches!(chain.search("x").await, Err(RemoteError::Status(503))));

        assert!(FallbackChain::new().search("x").await.unwrap().is_none());
    }
}
