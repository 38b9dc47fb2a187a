use std::collections::HashMap;

use async_trait::async_trait;
use glossa_core::clean::strip_markup;
use serde::Deserialize;

use crate::{ProviderMetadata, RemoteDictionary, RemoteEntry, RemoteError, check_status};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WiktionaryUsage {
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<WiktionaryDefinition>,
}

#[derive(Debug, Deserialize)]
struct WiktionaryDefinition {
    #[serde(default)]
    definition: String,
    #[serde(default)]
    examples: Vec<String>,
}

/// Example sentences kept per entry
const MAX_EXAMPLES: usize = 3;

/// Wiktionary REST definitions (`/page/definition/{word}`) for one language section
#[derive(Clone)]
pub struct WiktionaryClient {
    client: reqwest::Client,
    api_url: String,
    language: String,
}

impl WiktionaryClient {
    pub fn new(api_url: String, language: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            language: language.to_string(),
        }
    }

    fn page_url(&self, word: &str) -> Result<reqwest::Url, RemoteError> {
        let mut url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| RemoteError::InvalidEndpoint(format!("{}: {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| RemoteError::InvalidEndpoint(self.api_url.clone()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }
}

/// First usage of the word in `language`, glosses stripped of markup
pub(crate) fn parse_response(
    query: &str,
    language: &str,
    body: &str,
) -> Result<Option<RemoteEntry>, RemoteError> {
    let mut sections: HashMap<String, Vec<WiktionaryUsage>> = serde_json::from_str(body)?;
    let Some(usage) = sections.remove(language).and_then(|u| u.into_iter().next()) else {
        return Ok(None);
    };

    let glosses: Vec<String> = usage
        .definitions
        .iter()
        .map(|d| strip_markup(&d.definition))
        .filter(|d| !d.is_empty())
        .collect();
    if glosses.is_empty() {
        return Ok(None);
    }

    let examples = usage
        .definitions
        .iter()
        .flat_map(|d| &d.examples)
        .map(|e| strip_markup(e))
        .filter(|e| !e.is_empty())
        .take(MAX_EXAMPLES)
        .collect();

    Ok(Some(RemoteEntry {
        headword: query.to_string(),
        glosses,
        part_of_speech: usage.part_of_speech.into_iter().collect(),
        examples,
        ..Default::default()
    }))
}

#[async_trait]
impl RemoteDictionary for WiktionaryClient {
    async fn search(&self, query: &str) -> Result<Option<RemoteEntry>, RemoteError> {
        let response = self.client.get(self.page_url(query)?).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(response.status())?;

        let body = response.text().await?;
        parse_response(query, &self.language, &body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: format!("Wiktionary ({})", self.language),
            requires_api_key: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "ko": [
            {"partOfSpeech": "Noun", "language": "Korean", "definitions": [
                {"definition": "<a rel=\"mw:WikiLink\" href=\"/wiki/school\">school</a>", "examples": []},
                {"definition": "<span></span>", "examples": []}
            ]},
            {"partOfSpeech": "Verb", "definitions": [{"definition": "unused"}]}
        ],
        "en": [{"partOfSpeech": "Noun", "definitions": [{"definition": "other"}]}]
    }"#;

    #[test]
    fn test_language_section() {
        let entry = parse_response("학교", "ko", BODY).unwrap().unwrap();
        assert_eq!(entry.headword, "학교");
        assert_eq!(entry.glosses, vec!["school"]);
        assert_eq!(entry.part_of_speech, vec!["Noun"]);

        assert!(parse_response("학교", "ja", BODY).unwrap().is_none());
    }

    #[test]
    fn test_examples_are_cleaned_and_capped() {
        let body = r#"{"ko": [{"partOfSpeech": "Noun", "definitions": [
            {"definition": "school", "examples": ["<b>학교</b>에 가요", "", "학교가 커요"]},
            {"definition": "schooling", "examples": ["학교 생활", "학교 친구"]}
        ]}]}"#;
        let entry = parse_response("학교", "ko", body).unwrap().unwrap();

        assert_eq!(entry.examples, vec!["학교 에 가요", "학교가 커요", "학교 생활"]);
        assert_eq!(entry.into_entry().examples.len(), 3);
    }

    #[test]
    fn test_page_url_escapes_word() {
        let client = WiktionaryClient::new(
            "https://en.wiktionary.org/api/rest_v1/page/definition".to_string(),
            "ko",
        );
        let url = client.page_url("학교 가다").unwrap();
        assert!(url.as_str().starts_with("https://en.wiktionary.org/api/rest_v1/page/definition/"));
        assert!(!url.as_str().contains(' '));
        assert_eq!(client.metadata().name, "Wiktionary (ko)");
    }
}
