use async_trait::async_trait;
use glossa_core::clean::strip_markup;
use serde::Deserialize;

use crate::{ProviderMetadata, RemoteDictionary, RemoteEntry, RemoteError, check_status};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KoreanDictResponse {
    word: Option<String>,
    #[serde(default)]
    reading: String,
    #[serde(default)]
    definition: String,
    #[serde(default)]
    definitions: Vec<KoreanDefinition>,
    usage_notes: Option<String>,
    grammar_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KoreanDefinition {
    #[serde(default)]
    meaning: String,
    part_of_speech: Option<String>,
}

/// Korean-English dictionary endpoint (`?word=`), optionally behind a bearer key
#[derive(Clone)]
pub struct KoreanDictClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl KoreanDictClient {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }
}

pub(crate) fn parse_response(query: &str, body: &str) -> Result<Option<RemoteEntry>, RemoteError> {
    let Some(response) = serde_json::from_str::<Option<KoreanDictResponse>>(body)? else {
        return Ok(None);
    };

    let mut entry = RemoteEntry {
        headword: response.word.unwrap_or_else(|| query.to_string()),
        reading: response.reading,
        ..Default::default()
    };

    for definition in &response.definitions {
        let meaning = strip_markup(&definition.meaning);
        if !meaning.is_empty() {
            entry.glosses.push(meaning);
        }
        match &definition.part_of_speech {
            Some(pos) if !entry.part_of_speech.contains(pos) => entry.part_of_speech.push(pos.clone()),
            _ => {}
        }
    }
    if entry.glosses.is_empty() {
        let definition = strip_markup(&response.definition);
        if definition.is_empty() {
            return Ok(None);
        }
        entry.glosses.push(definition);
    }

    entry.notes = [response.grammar_notes, response.usage_notes]
        .into_iter()
        .flatten()
        .map(|n| strip_markup(&n))
        .filter(|n| !n.is_empty())
        .collect();

    Ok(Some(entry))
}

#[async_trait]
impl RemoteDictionary for KoreanDictClient {
    async fn search(&self, query: &str) -> Result<Option<RemoteEntry>, RemoteError> {
        let mut request = self.client.get(&self.api_url).query(&[("word", query)]);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(response.status())?;

        let body = response.text().await?;
        parse_response(query, &body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Korean dictionary".to_string(),
            requires_api_key: self.api_key.is_some(),
        }
    }
}
