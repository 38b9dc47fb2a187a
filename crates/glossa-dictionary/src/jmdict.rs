//! JMdict in the jmdict-simplified JSON layout.

use std::io::Read;

use glossa_core::dictionary::{DictionaryEntry, DictionaryIndex};
use serde::Deserialize;

use crate::error::BuildError;
use crate::progress::{BuildProgress, BuildReport, ProgressTracker};

/// Separator between glosses of the same sense
const SENSE_GLOSS_SEPARATOR: &str = ", ";

/// Example sentences kept per word
const MAX_EXAMPLES: usize = 3;

#[derive(Debug, Deserialize)]
struct JmdictDocument {
    #[serde(default)]
    words: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct JmdictWord {
    #[serde(default)]
    kanji: Vec<Writing>,
    #[serde(default)]
    kana: Vec<Writing>,
    #[serde(default)]
    sense: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct Writing {
    text: String,
    #[serde(default)]
    common: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Sense {
    #[serde(default)]
    part_of_speech: Vec<String>,
    #[serde(default)]
    gloss: Vec<Gloss>,
    #[serde(default)]
    info: Vec<String>,
    #[serde(default)]
    examples: Vec<Example>,
}

/// Tatoeba sentence pair attached to a sense (jmdict-examples variant)
#[derive(Debug, Deserialize)]
struct Example {
    #[serde(default)]
    sentences: Vec<Sentence>,
}

#[derive(Debug, Deserialize)]
struct Sentence {
    #[serde(default)]
    land: String,
    text: String,
}

impl Example {
    /// `"japanese (english)"`, when both sides are present
    fn render(&self) -> Option<String> {
        let side = |lang: &str| {
            self.sentences
                .iter()
                .find(|s| s.land == lang && !s.text.trim().is_empty())
                .map(|s| s.text.trim())
        };
        Some(format!("{} ({})", side("jpn")?, side("eng")?))
    }
}

#[derive(Debug, Deserialize)]
struct Gloss {
    #[serde(default = "english")]
    lang: String,
    text: String,
}

fn english() -> String {
    "eng".to_string()
}

fn push_unique(list: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !list.contains(item) {
            list.push(item.clone());
        }
    }
}

/// English glosses, one string per sense, plus merged part-of-speech tags,
/// usage notes and the first few example sentences. `None` when no sense
/// has an English gloss.
fn shared_entry(word: &JmdictWord) -> Option<DictionaryEntry> {
    let mut entry = DictionaryEntry::default();

    for sense in &word.sense {
        let glosses: Vec<&str> = sense
            .gloss
            .iter()
            .filter(|g| g.lang == "eng")
            .map(|g| g.text.as_str())
            .collect();
        if glosses.is_empty() {
            continue;
        }

        entry.glosses.push(glosses.join(SENSE_GLOSS_SEPARATOR));
        push_unique(&mut entry.part_of_speech, &sense.part_of_speech);
        push_unique(&mut entry.notes, &sense.info);

        for example in sense.examples.iter().filter_map(Example::render) {
            if entry.examples.len() < MAX_EXAMPLES && !entry.examples.contains(&example) {
                entry.examples.push(example);
            }
        }
    }

    (!entry.glosses.is_empty()).then_some(entry)
}

/// Build an index keyed by every kanji writing and every kana reading.
///
/// Kanji keys always take the slot; kana keys are only added when no entry
/// exists yet, so a kana string equal to another word's writing keeps the
/// writing's entry.
pub fn build<R: Read>(
    reader: R,
    progress: impl FnMut(BuildProgress),
) -> Result<(DictionaryIndex, BuildReport), BuildError> {
    let document: JmdictDocument = serde_json::from_reader(reader)?;
    let mut index = DictionaryIndex::new();
    let mut tracker = ProgressTracker::new(progress);

    for value in document.words {
        let word: JmdictWord = match serde_json::from_value(value) {
            Ok(word) => word,
            Err(e) => {
                tracing::debug!("Skipping malformed JMdict word: {}", e);
                tracker.skipped();
                continue;
            }
        };

        let Some(reading) = word.kana.first().map(|k| k.text.clone()) else {
            tracker.skipped();
            continue;
        };
        let Some(shared) = shared_entry(&word) else {
            tracker.skipped();
            continue;
        };

        for kanji in &word.kanji {
            index.insert(
                kanji.text.clone(),
                DictionaryEntry {
                    headword: kanji.text.clone(),
                    reading: reading.clone(),
                    common: kanji.common,
                    ..shared.clone()
                },
            );
        }

        for kana in &word.kana {
            index.insert_if_absent(
                kana.text.clone(),
                DictionaryEntry {
                    headword: kana.text.clone(),
                    reading: kana.text.clone(),
                    common: kana.common,
                    ..shared.clone()
                },
            );
        }

        tracker.indexed();
    }

    let report = tracker.finish(index.len());
    tracing::info!(
        "JMdict build: {} words indexed, {} skipped, {} keys",
        report.indexed,
        report.skipped,
        report.keys
    );
    Ok((index, report))
}
