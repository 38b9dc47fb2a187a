//! CC-CEDICT text source.
//!
//! One entry per line: `TRADITIONAL SIMPLIFIED [pin1 yin1] /gloss 1/gloss 2/`.

use std::io::{BufRead, ErrorKind};
use std::sync::LazyLock;

use glossa_core::dictionary::{DictionaryEntry, DictionaryIndex};
use regex::Regex;

use crate::error::BuildError;
use crate::progress::{BuildProgress, BuildReport, ProgressTracker};

static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(\S+)\s+\[([^\]]+)\]\s+/(.+)/\s*$").expect("invalid CEDICT line pattern")
});

/// A parsed CEDICT line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CedictLine {
    pub traditional: String,
    pub simplified: String,
    /// Numbered pinyin, as written in the source
    pub pinyin: String,
    pub glosses: Vec<String>,
}

/// Parse one line. Comments, headers and malformed rows give `None`.
pub fn parse_line(line: &str) -> Option<CedictLine> {
    let caps = LINE.captures(line)?;

    let glosses: Vec<String> = caps[4]
        .split('/')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();
    if glosses.is_empty() {
        return None;
    }

    Some(CedictLine {
        traditional: caps[1].to_string(),
        simplified: caps[2].to_string(),
        pinyin: caps[3].trim().to_string(),
        glosses,
    })
}

/// Build an index keyed by simplified form, plus traditional where it differs.
/// A later line for the same key replaces the earlier one.
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
                tracing::debug!("Skipping non UTF-8 CEDICT line");
                tracker.skipped();
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some(parsed) = parse_line(&line) else {
            tracker.skipped();
            continue;
        };

        let entry = DictionaryEntry {
            headword: parsed.simplified.clone(),
            reading: parsed.pinyin,
            glosses: parsed.glosses,
            ..Default::default()
        };

        if parsed.traditional != parsed.simplified {
            index.insert(
                parsed.traditional.clone(),
                DictionaryEntry {
                    headword: parsed.traditional,
                    ..entry.clone()
                },
            );
        }
        index.insert(parsed.simplified, entry);
        tracker.indexed();
    }

    let report = tracker.finish(index.len());
    tracing::info!(
        "CEDICT build: {} lines indexed, {} skipped, {} keys",
        report.indexed,
        report.skipped,
        report.keys
    );
    Ok((index, report))
}
