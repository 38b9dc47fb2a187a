use async_trait::async_trait;
use serde::Deserialize;

use crate::{ProviderMetadata, RemoteDictionary, RemoteEntry, RemoteError, check_status};

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    simplified: Option<String>,
    #[serde(default)]
    pinyin: String,
    #[serde(default)]
    english: String,
}

/// Chinese dictionary search endpoint (`?q=`)
#[derive(Clone)]
pub struct ChineseSearchClient {
    client: reqwest::Client,
    api_url: String,
}

impl ChineseSearchClient {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

pub(crate) fn parse_response(query: &str, body: &str) -> Result<Option<RemoteEntry>, RemoteError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let Some(result) = response.results.into_iter().next() else {
        return Ok(None);
    };

    let glosses: Vec<String> = result
        .english
        .split(['/', ';'])
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();
    if glosses.is_empty() {
        return Ok(None);
    }

    Ok(Some(RemoteEntry {
        headword: result.simplified.unwrap_or_else(|| query.to_string()),
        reading: result.pinyin,
        glosses,
        ..Default::default()
    }))
}

#[async_trait]
impl RemoteDictionary for ChineseSearchClient {
    async fn search(&self, query: &str) -> Result<Option<RemoteEntry>, RemoteError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", query)])
            .send()
            .await?;
        check_status(response.status())?;

        let body = response.text().await?;
        parse_response(query, &body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Chinese dictionary search".to_string(),
            requires_api_key: false,
        }
    }
}
