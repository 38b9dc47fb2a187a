//! Korean word list extracted from Wiktionary, one JSON object per line:
//! `{"": word, "d": [definitions], "f": [forms], "p": [parts of speech], "i": ipa}`.

use std::io::{BufRead, ErrorKind};

use glossa_core::dictionary::{DictionaryEntry, DictionaryIndex};
use serde::Deserialize;

use crate::error::BuildError;
use crate::progress::{BuildProgress, BuildReport, ProgressTracker};

#[derive(Debug, Deserialize)]
struct KoreanRecord {
    #[serde(rename = "", default)]
    word: String,
    #[serde(rename = "d", default)]
    definitions: Vec<String>,
    #[serde(rename = "f", default)]
    forms: Vec<String>,
    #[serde(rename = "p", default)]
    parts_of_speech: Vec<String>,
    #[serde(rename = "i", default)]
    ipa: Option<String>,
}

/// First form written in Latin script
fn romanization(forms: &[String]) -> Option<&str> {
    forms
        .iter()
        .map(String::as_str)
        .find(|f| f.starts_with(|c: char| c.is_ascii_alphabetic()))
}

/// Build an index keyed by Korean word. The romanized form is added as an
/// alias pointing back at the word, unless that key is already taken.
pub fn build<R: BufRead>(
    reader: R,
    progress: impl FnMut(BuildProgress),
) -> Result<(DictionaryIndex, BuildReport), BuildError> {
    let mut index = DictionaryIndex::new();
    let mut tracker = ProgressTracker::new(progress);

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracker.skipped();
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if line.trim().is_empty() {
            continue;
        }

        let record: KoreanRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Skipping unparseable Korean record: {}", e);
                tracker.skipped();
                continue;
            }
        };
        if record.word.is_empty() || record.definitions.is_empty() {
            tracker.skipped();
            continue;
        }

        let reading = romanization(&record.forms).unwrap_or_default().to_string();
        let notes = record
            .ipa
            .as_deref()
            .map(str::trim)
            .filter(|ipa| !ipa.is_empty())
            .map(|ipa| vec![format!("IPA: {ipa}")])
            .unwrap_or_default();
        let entry = DictionaryEntry {
            headword: record.word.clone(),
            reading: reading.clone(),
            glosses: record.definitions,
            part_of_speech: record.parts_of_speech,
            notes,
            ..Default::default()
        };

        if !reading.is_empty() && reading != record.word {
            index.insert_if_absent(reading, entry.clone());
        }
        index.insert(record.word, entry);
        tracker.indexed();
    }

    let report = tracker.finish(index.len());
    tracing::info!(
        "Korean build: {} records indexed, {} skipped, {} keys",
        report.indexed,
        report.skipped,
        report.keys
    );
    Ok((index, report))
}
