use std::env;

use serde::{Deserialize, Serialize};

use crate::env_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentationMode {
    /// One token per codepoint
    #[default]
    Character,
    /// Longest embedded-dictionary word at each position
    LongestMatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Mode for Chinese and Japanese text
    pub mode: SegmentationMode,
    /// Longest word considered by longest-match mode, in codepoints
    pub max_window: usize,
    /// Appended to the built-in Korean particle table
    pub korean_extra_particles: Vec<String>,
    /// Appended to the built-in Korean verb ending table
    pub korean_extra_endings: Vec<String>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            mode: SegmentationMode::Character,
            max_window: 10,
            korean_extra_particles: vec![],
            korean_extra_endings: vec![],
        }
    }
}

impl SegmentationConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let mode = match env::var("GLOSSA_SEGMENTATION").as_deref() {
            Ok("longest-match") => SegmentationMode::LongestMatch,
            _ => defaults.mode,
        };

        let max_window = env::var("GLOSSA_MAX_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|w: &usize| *w > 0)
            .unwrap_or(defaults.max_window);

        Self {
            mode,
            max_window,
            korean_extra_particles: env_list("GLOSSA_KO_PARTICLES"),
            korean_extra_endings: env_list("GLOSSA_KO_ENDINGS"),
        }
    }
}
