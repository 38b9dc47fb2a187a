use std::sync::Arc;

use glossa_config::segmentation::{SegmentationConfig, SegmentationMode};
use glossa_core::dictionary::{Dictionary, EmbeddedDictionary};
use glossa_core::language::{LanguageProcessor, LanguageTag, Token};
use glossa_core::segment::{segment_characters, segment_longest_match};

use crate::embedded::embedded_dictionary;
use crate::tone::render_tone;

/// Chinese language processor
pub struct ChineseProcessor {
    embedded: Arc<EmbeddedDictionary>,
    mode: SegmentationMode,
    max_window: usize,
}

impl ChineseProcessor {
    /// Character segmentation with the embedded dictionary
    pub fn new() -> Self {
        Self::with_config(&SegmentationConfig::default())
    }

    /// Longest-match windows never exceed the longest embedded word
    pub fn with_config(config: &SegmentationConfig) -> Self {
        let embedded = embedded_dictionary();
        let max_window = config.max_window.min(embedded.index().max_key_chars().max(1));

        Self {
            embedded: Arc::new(embedded),
            mode: config.mode,
            max_window,
        }
    }

    pub fn max_window(&self) -> usize {
        self.max_window
    }

    /// The embedded dictionary, shared with the resolver's first tier
    pub fn embedded(&self) -> Arc<EmbeddedDictionary> {
        Arc::clone(&self.embedded)
    }
}

impl Default for ChineseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for ChineseProcessor {
    fn language(&self) -> LanguageTag {
        LanguageTag::Chinese
    }

    fn segment(&self, text: &str) -> Vec<Token> {
        match self.mode {
            SegmentationMode::Character => segment_characters(text),
            SegmentationMode::LongestMatch => {
                segment_longest_match(text, self.max_window, |s| self.embedded.contains(s))
            }
        }
    }

    fn render_reading(&self, reading: &str) -> String {
        render_tone(reading)
    }
}
