use glossa_core::language::LanguageTag;

use crate::{RemoteError, check_status};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Text-to-speech relay. The audio bytes are returned untouched.
#[derive(Clone)]
pub struct SpeechClient {
    client: reqwest::Client,
    api_url: String,
}

impl SpeechClient {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Voice locale for a language
    pub fn voice(language: &LanguageTag) -> &str {
        match language {
            LanguageTag::Chinese => "zh-CN",
            LanguageTag::Japanese => "ja",
            LanguageTag::Korean => "ko",
            LanguageTag::Other(code) => code,
        }
    }

    pub async fn synthesize(&self, text: &str, language: &LanguageTag) -> Result<Vec<u8>, RemoteError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .get(&self.api_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("ie", "UTF-8"),
                ("tl", Self::voice(language)),
                ("client", "tw-ob"),
                ("q", text),
            ])
            .send()
            .await?;
        check_status(response.status())?;

        let audio = response.bytes().await?;
        tracing::debug!("Synthesized {} bytes of audio for {}", audio.len(), language);
        Ok(audio.to_vec())
    }
}
