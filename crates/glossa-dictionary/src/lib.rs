//! Offline builders that turn raw dictionary sources into index artifacts.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glossa_core::dictionary::DictionaryIndex;
use glossa_core::language::LanguageTag;

pub mod cedict;
pub mod error;
pub mod jmdict;
pub mod korean;
pub mod progress;

#[cfg(test)]
mod tests;

pub use error::BuildError;
pub use progress::{BuildProgress, BuildReport, PROGRESS_INTERVAL};

/// Raw dictionary source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// CC-CEDICT text
    Cedict,
    /// jmdict-simplified JSON
    Jmdict,
    /// Wiktionary-extracted Korean JSONL
    KoreanJsonl,
}

impl SourceFormat {
    pub fn for_language(language: &LanguageTag) -> Result<Self, BuildError> {
        match language {
            LanguageTag::Chinese => Ok(SourceFormat::Cedict),
            LanguageTag::Japanese => Ok(SourceFormat::Jmdict),
            LanguageTag::Korean => Ok(SourceFormat::KoreanJsonl),
            LanguageTag::Other(code) => Err(BuildError::UnsupportedLanguage(code.clone())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Cedict => "CC-CEDICT",
            SourceFormat::Jmdict => "JMdict",
            SourceFormat::KoreanJsonl => "Korean JSONL",
        }
    }

    /// Build an index from a source file
    pub fn build_from_path(
        &self,
        path: &Path,
        progress: impl FnMut(BuildProgress),
    ) -> Result<(DictionaryIndex, BuildReport), BuildError> {
        tracing::info!("Building {} index from {}", self.name(), path.display());
        let reader = BufReader::new(File::open(path)?);

        match self {
            SourceFormat::Cedict => cedict::build(reader, progress),
            SourceFormat::Jmdict => jmdict::build(reader, progress),
            SourceFormat::KoreanJsonl => korean::build(reader, progress),
        }
    }
}

/// Build `source` and write the artifact to `output`
pub fn build_artifact(
    format: SourceFormat,
    source: &Path,
    output: &Path,
    progress: impl FnMut(BuildProgress),
) -> Result<BuildReport, BuildError> {
    let (index, report) = format.build_from_path(source, progress)?;
    index.save_to_file(output)?;
    Ok(report)
}
