use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lookup::LookupResult;

/// Language of the text being segmented and looked up.
///
/// Chinese, Japanese and Korean have dedicated segmentation rules; every other
/// tag is treated as a space-delimited language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageTag {
    Chinese,
    Japanese,
    Korean,
    Other(String),
}

impl LanguageTag {
    /// ISO 639-1 code ("zh", "ja", "ko", ...)
    pub fn code(&self) -> &str {
        match self {
            LanguageTag::Chinese => "zh",
            LanguageTag::Japanese => "ja",
            LanguageTag::Korean => "ko",
            LanguageTag::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase();
        match code.as_str() {
            "zh" | "zh-cn" | "zh-tw" | "zh-hans" | "zh-hant" | "cmn" | "chinese" => {
                LanguageTag::Chinese
            }
            "ja" | "jp" | "ja-jp" | "japanese" => LanguageTag::Japanese,
            "ko" | "kr" | "ko-kr" | "korean" => LanguageTag::Korean,
            _ => LanguageTag::Other(code),
        }
    }

    /// Whether the orthography carries no word-boundary whitespace
    pub fn is_unspaced(&self) -> bool {
        matches!(self, LanguageTag::Chinese | LanguageTag::Japanese)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl From<String> for LanguageTag {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.code().to_string()
    }
}

/// A segment of source text.
///
/// `start` and `end` are half-open codepoint offsets into the text the token
/// was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    pub is_particle: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            reading: None,
            is_particle: false,
        }
    }

    pub fn particle(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            is_particle: true,
            ..Self::new(text, start, end)
        }
    }

    /// Length in codepoints
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }
}

/// Result of stripping a known inflectional ending from a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationMatch {
    pub stem: String,
    pub ending: String,
    /// Ending belongs to the irregular (e.g. 하다) family
    pub is_irregular_class: bool,
    /// Dictionary form reconstructed from the stem
    pub citation: String,
    /// Human readable conjugation label, e.g. "past-polite-informal"
    pub kind: String,
}

/// One query form to try against the dictionaries, in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCandidate {
    pub query: String,
    pub conjugation: Option<ConjugationMatch>,
}

impl LookupCandidate {
    pub fn surface(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            conjugation: None,
        }
    }

    pub fn citation(conjugation: ConjugationMatch) -> Self {
        Self {
            query: conjugation.citation.clone(),
            conjugation: Some(conjugation),
        }
    }
}

/// Segmentation and lookup rules for one language
pub trait LanguageProcessor: Send + Sync {
    fn language(&self) -> LanguageTag;

    /// Break text into tokens. Total: never fails, for any input.
    fn segment(&self, text: &str) -> Vec<Token>;

    /// Forms to query for a surface form, most specific first
    fn lookup_candidates(&self, surface: &str) -> Vec<LookupCandidate> {
        vec![LookupCandidate::surface(surface)]
    }

    /// Display form of a stored reading
    fn render_reading(&self, reading: &str) -> String {
        reading.to_string()
    }

    /// Fill in details the answering dictionary lacks
    fn supplement(&self, _result: &mut LookupResult) {}

    /// Why a surface form that resolved at no tier may have no entry
    fn miss_hint(&self, _surface: &str) -> Option<&'static str> {
        None
    }
}

/// Optional trait for languages with conjugation
pub trait Deconjugator: Send + Sync {
    /// Possible dictionary forms of a word, best first
    fn deconjugate(&self, word: &str) -> Vec<ConjugationMatch>;
}
