use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::language::LanguageTag;

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Search dictionary by exact surface form
    fn lookup_exact(&self, query: &str) -> Option<&DictionaryEntry>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;

    fn contains(&self, query: &str) -> bool {
        self.lookup_exact(query).is_some()
    }
}

/// Individual dictionary entry, the value type of an index artifact.
///
/// Fields added later must default on deserialization so older artifacts
/// keep loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub headword: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub glosses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part_of_speech: Vec<String>,
    #[serde(default)]
    pub common: bool,
    /// Usage information attached to the senses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// JLPT level, 5 (easiest) to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jlpt: Option<u8>,
    /// Example sentences, each with its translation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl DictionaryEntry {
    /// Glosses joined for display
    pub fn definition(&self) -> String {
        self.glosses.join("; ")
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

/// Surface form → entry map.
///
/// Keys are kept ordered so that serializing the same index always yields the
/// same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictionaryIndex {
    entries: BTreeMap<String, DictionaryEntry>,
}

impl DictionaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&DictionaryEntry> {
        self.entries.get(key)
    }

    /// Insert or replace the entry under `key`
    pub fn insert(&mut self, key: impl Into<String>, entry: DictionaryEntry) -> Option<DictionaryEntry> {
        self.entries.insert(key.into(), entry)
    }

    /// Insert only when `key` is not indexed yet. Returns whether it was inserted.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, entry: DictionaryEntry) -> bool {
        match self.entries.entry(key.into()) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DictionaryEntry)> {
        self.entries.iter()
    }

    /// Longest key, in codepoints
    pub fn max_key_chars(&self) -> usize {
        self.entries
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn write_to(&self, writer: impl Write) -> Result<(), LoadError> {
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Load an index artifact from disk
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        tracing::info!("Loading dictionary index from file: {}", path.display());
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            _ => LoadError::IoError(e),
        })?;
        let index = Self::from_reader(BufReader::new(file))?;
        tracing::info!("Loaded {} dictionary entries from file", index.len());
        Ok(index)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), LoadError> {
        self.write_to(File::create(path)?)?;
        tracing::info!("Wrote {} dictionary entries to {}", self.len(), path.display());
        Ok(())
    }
}

impl FromIterator<(String, DictionaryEntry)> for DictionaryIndex {
    fn from_iter<T: IntoIterator<Item = (String, DictionaryEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Dictionary for DictionaryIndex {
    fn lookup_exact(&self, query: &str) -> Option<&DictionaryEntry> {
        self.get(query)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "index".to_string(),
            language: String::new(),
            entry_count: self.len(),
        }
    }
}

/// Small curated dictionary compiled into the binary
pub struct EmbeddedDictionary {
    name: String,
    language: LanguageTag,
    index: DictionaryIndex,
}

impl EmbeddedDictionary {
    pub fn new(name: impl Into<String>, language: LanguageTag, index: DictionaryIndex) -> Self {
        Self {
            name: name.into(),
            language,
            index,
        }
    }

    /// Parse embedded artifact data, falling back to an empty dictionary
    pub fn from_json(name: &str, language: LanguageTag, json: &str) -> Self {
        let index = DictionaryIndex::from_json(json).unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded {} dictionary: {}", name, e);
            tracing::warn!("Starting with empty dictionary");
            DictionaryIndex::new()
        });
        tracing::debug!("Embedded {} dictionary: {} entries", name, index.len());
        Self::new(name, language, index)
    }

    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }
}

impl Dictionary for EmbeddedDictionary {
    fn lookup_exact(&self, query: &str) -> Option<&DictionaryEntry> {
        self.index.get(query)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            language: self.language.code().to_string(),
            entry_count: self.index.len(),
        }
    }
}
