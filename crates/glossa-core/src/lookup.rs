use serde::Serialize;

use crate::dictionary::DictionaryEntry;
use crate::language::ConjugationMatch;

/// Shown by callers when a word resolves at no tier
pub const NO_DEFINITION: &str = "No definition available";

/// Tier that answered a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LookupSource {
    Embedded,
    FullDict,
    RemoteApi,
}

impl LookupSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupSource::Embedded => "embedded",
            LookupSource::FullDict => "full-dictionary",
            LookupSource::RemoteApi => "remote-api",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentCharacter {
    pub character: String,
    pub reading: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub word: String,
    pub reading: String,
    pub definition: String,
    pub source: LookupSource,
    pub glosses: Vec<String>,
    pub part_of_speech: Vec<String>,
    pub notes: Vec<String>,
    /// JLPT level, 5 (easiest) to 1
    pub jlpt: Option<u8>,
    pub examples: Vec<String>,
    /// Normalization that led to the hit, when the surface form was conjugated
    pub conjugation: Option<ConjugationMatch>,
    /// Per-character breakdown of multi-character words
    pub components: Vec<ComponentCharacter>,
}

impl LookupResult {
    pub fn from_entry(entry: &DictionaryEntry, source: LookupSource) -> Self {
        Self {
            word: entry.headword.clone(),
            reading: entry.reading.clone(),
            definition: entry.definition(),
            source,
            glosses: entry.glosses.clone(),
            part_of_speech: entry.part_of_speech.clone(),
            notes: entry.notes.clone(),
            jlpt: entry.jlpt,
            examples: entry.examples.clone(),
            conjugation: None,
            components: Vec::new(),
        }
    }
}
