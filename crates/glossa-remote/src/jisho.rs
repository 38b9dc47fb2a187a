use async_trait::async_trait;
use serde::Deserialize;

use crate::{ProviderMetadata, RemoteDictionary, RemoteEntry, RemoteError, check_status};

/// Senses kept from a Jisho result
const MAX_SENSES: usize = 5;

#[derive(Debug, Default, Deserialize)]
struct JishoResponse {
    #[serde(default)]
    data: Vec<JishoWord>,
}

#[derive(Debug, Deserialize)]
struct JishoWord {
    #[serde(default)]
    japanese: Vec<JishoJapanese>,
    #[serde(default)]
    senses: Vec<JishoSense>,
}

#[derive(Debug, Deserialize)]
struct JishoJapanese {
    word: Option<String>,
    reading: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JishoSense {
    #[serde(default)]
    english_definitions: Vec<String>,
    #[serde(default)]
    parts_of_speech: Vec<String>,
    #[serde(default)]
    info: Vec<String>,
}

/// Jisho word search (`/api/v1/search/words?keyword=`)
#[derive(Clone)]
pub struct JishoClient {
    client: reqwest::Client,
    api_url: String,
}

impl JishoClient {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

/// First result of a search response
pub(crate) fn parse_response(body: &str) -> Result<Option<RemoteEntry>, RemoteError> {
    let response: JishoResponse = serde_json::from_str(body)?;
    let Some(word) = response.data.into_iter().next() else {
        return Ok(None);
    };
    let Some(japanese) = word.japanese.into_iter().next() else {
        return Ok(None);
    };

    let reading = japanese.reading.unwrap_or_default();
    let headword = japanese.word.unwrap_or_else(|| reading.clone());

    let mut entry = RemoteEntry {
        headword,
        reading,
        ..Default::default()
    };
    for (i, sense) in word.senses.into_iter().take(MAX_SENSES).enumerate() {
        if sense.english_definitions.is_empty() {
            continue;
        }
        entry.glosses.push(sense.english_definitions.join(", "));
        for pos in sense.parts_of_speech {
            if !entry.part_of_speech.contains(&pos) {
                entry.part_of_speech.push(pos);
            }
        }
        // Usage notes come from the primary sense
        if i == 0 {
            entry.notes = sense.info;
        }
    }

    if entry.glosses.is_empty() {
        return Ok(None);
    }
    Ok(Some(entry))
}

#[async_trait]
impl RemoteDictionary for JishoClient {
    async fn search(&self, query: &str) -> Result<Option<RemoteEntry>, RemoteError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("keyword", query)])
            .send()
            .await?;
        check_status(response.status())?;

        let body = response.text().await?;
        parse_response(&body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Jisho".to_string(),
            requires_api_key: false,
        }
    }
}
