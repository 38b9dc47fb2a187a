use std::sync::Arc;

use glossa_config::segmentation::{SegmentationConfig, SegmentationMode};
use glossa_core::dictionary::{Dictionary, EmbeddedDictionary};
use glossa_core::language::{Deconjugator, LanguageProcessor, LanguageTag, LookupCandidate, Token};
use glossa_core::lookup::LookupResult;
use glossa_core::segment::{segment_characters, segment_longest_match};

use crate::deconjugator::JapaneseDeconjugator;
use crate::embedded::embedded_dictionary;
use crate::jlpt::JlptLevels;

/// Japanese language processor
pub struct JapaneseProcessor {
    embedded: Arc<EmbeddedDictionary>,
    deconjugator: JapaneseDeconjugator,
    jlpt: JlptLevels,
    mode: SegmentationMode,
    max_window: usize,
}

impl JapaneseProcessor {
    pub fn new() -> Self {
        Self::with_config(&SegmentationConfig::default())
    }

    pub fn with_config(config: &SegmentationConfig) -> Self {
        Self {
            embedded: Arc::new(embedded_dictionary()),
            deconjugator: JapaneseDeconjugator::new(),
            jlpt: JlptLevels::embedded(),
            mode: config.mode,
            max_window: config.max_window,
        }
    }

    pub fn embedded(&self) -> Arc<EmbeddedDictionary> {
        Arc::clone(&self.embedded)
    }

    /// Known either as written or through one of its dictionary forms
    fn is_known(&self, surface: &str) -> bool {
        self.embedded.contains(surface)
            || self
                .deconjugator
                .deconjugate(surface)
                .iter()
                .any(|m| self.embedded.contains(&m.citation))
    }
}

impl Default for JapaneseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for JapaneseProcessor {
    fn language(&self) -> LanguageTag {
        LanguageTag::Japanese
    }

    fn segment(&self, text: &str) -> Vec<Token> {
        match self.mode {
            SegmentationMode::Character => segment_characters(text),
            SegmentationMode::LongestMatch => {
                segment_longest_match(text, self.max_window, |s| self.is_known(s))
            }
        }
    }

    /// The surface form, then every dictionary form it may be inflected from
    fn lookup_candidates(&self, surface: &str) -> Vec<LookupCandidate> {
        let mut candidates = vec![LookupCandidate::surface(surface)];
        candidates.extend(
            self.deconjugator
                .deconjugate(surface)
                .into_iter()
                .map(LookupCandidate::citation),
        );
        candidates
    }

    /// JLPT level from the bundled table when the dictionary carries none
    fn supplement(&self, result: &mut LookupResult) {
        if result.jlpt.is_none() {
            result.jlpt = self.jlpt.get(&result.word).map(|level| level.number());
        }
    }
}

#[cfg(test)]
mod tests {
    use glossa_core::segment::slice_chars;

    use super::*;

    #[test]
    fn test_character_mode_default() {
        let processor = JapaneseProcessor::new();
        let tokens = processor.segment("私は学生です");
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[1].text, "は");
    }

    #[test]
    fn test_longest_match_with_conjugated_verb() {
        let config = SegmentationConfig {
            mode: SegmentationMode::LongestMatch,
            ..Default::default()
        };
        let processor = JapaneseProcessor::with_config(&config);
        let text = "私は本を読んで";
        let tokens = processor.segment(text);

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["私", "は", "本", "を", "読んで"]);

        let rebuilt: String = tokens.iter().map(|t| slice_chars(text, t.start, t.end)).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_candidates_start_with_surface() {
        let processor = JapaneseProcessor::new();
        let candidates = processor.lookup_candidates("食べます");

        assert_eq!(candidates[0].query, "食べます");
        assert!(candidates[0].conjugation.is_none());
        assert_eq!(candidates[1].query, "食べる");
        assert_eq!(candidates[1].conjugation.as_ref().unwrap().ending, "ます");
    }

    #[test]
    fn test_supplement_fills_missing_jlpt_only() {
        use glossa_core::dictionary::DictionaryEntry;
        use glossa_core::lookup::LookupSource;

        let processor = JapaneseProcessor::new();
        let entry = DictionaryEntry {
            headword: "食べる".to_string(),
            glosses: vec!["to eat".to_string()],
            ..Default::default()
        };

        let mut missing = LookupResult::from_entry(&entry, LookupSource::FullDict);
        processor.supplement(&mut missing);
        assert_eq!(missing.jlpt, Some(5));

        let mut present = LookupResult::from_entry(
            &DictionaryEntry { jlpt: Some(3), ..entry },
            LookupSource::FullDict,
        );
        processor.supplement(&mut present);
        assert_eq!(present.jlpt, Some(3));
    }

    #[test]
    fn test_embedded_particle_notes() {
        let processor = JapaneseProcessor::new();
        let entry = processor.embedded().lookup_exact("か").cloned().unwrap();
        assert_eq!(entry.part_of_speech, vec!["particle"]);
        assert!(!entry.notes.is_empty());
    }
}
