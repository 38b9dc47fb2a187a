use std::sync::Arc;

use glossa_config::segmentation::SegmentationConfig;
use glossa_core::dictionary::EmbeddedDictionary;
use glossa_core::language::{LanguageProcessor, LanguageTag, LookupCandidate, Token};
use glossa_core::segment::split_runs;

use crate::conjugation::EndingTable;
use crate::embedded::embedded_dictionary;
use crate::names::is_likely_name;
use crate::particles::ParticleTable;

pub const NAME_HINT: &str = "This appears to be a proper noun (name or place)";
pub const UNKNOWN_HINT: &str = "This word may be a proper noun, abbreviation, or not in the dictionary";

/// Korean language processor.
///
/// Korean separates words with spaces, so segmentation splits on whitespace
/// and then peels a trailing particle off each word.
pub struct KoreanProcessor {
    embedded: Arc<EmbeddedDictionary>,
    particles: ParticleTable,
    endings: EndingTable,
}

impl KoreanProcessor {
    pub fn new() -> Self {
        Self::with_config(&SegmentationConfig::default())
    }

    pub fn with_config(config: &SegmentationConfig) -> Self {
        let particles = ParticleTable::with_extra(config.korean_extra_particles.clone());
        let endings = EndingTable::with_extra(config.korean_extra_endings.clone());
        tracing::debug!("Korean tables: {} particles, {} endings", particles.len(), endings.len());

        Self {
            embedded: Arc::new(embedded_dictionary()),
            particles,
            endings,
        }
    }

    pub fn embedded(&self) -> Arc<EmbeddedDictionary> {
        Arc::clone(&self.embedded)
    }
}

impl Default for KoreanProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for KoreanProcessor {
    fn language(&self) -> LanguageTag {
        LanguageTag::Korean
    }

    /// Whitespace is dropped but still advances offsets
    fn segment(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for run in split_runs(text).into_iter().filter(|r| !r.is_whitespace) {
            match self.particles.detect(&run.text) {
                Some((stem, particle)) => {
                    let stem_end = run.start + stem.chars().count();
                    tokens.push(Token::new(stem, run.start, stem_end));
                    tokens.push(Token::particle(particle, stem_end, run.end));
                }
                None => tokens.push(Token::new(run.text, run.start, run.end)),
            }
        }

        tokens
    }

    /// Citation form first when the word carries a known ending, then the word itself
    fn lookup_candidates(&self, surface: &str) -> Vec<LookupCandidate> {
        match self.endings.detect(surface) {
            Some(conjugation) => vec![
                LookupCandidate::citation(conjugation.clone()),
                // the normalization is still reported when only the surface form is known
                LookupCandidate {
                    query: surface.to_string(),
                    conjugation: Some(conjugation),
                },
            ],
            None => vec![LookupCandidate::surface(surface)],
        }
    }

    fn miss_hint(&self, surface: &str) -> Option<&'static str> {
        if is_likely_name(surface) {
            Some(NAME_HINT)
        } else {
            Some(UNKNOWN_HINT)
        }
    }
}

#[cfg(test)]
mod tests {
    use glossa_core::dictionary::Dictionary;
    use glossa_core::segment::slice_chars;

    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_particle_split() {
        let processor = KoreanProcessor::new();
        let tokens = processor.segment("학교에서");

        assert_eq!(texts(&tokens), vec!["학교", "에서"]);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
        assert_eq!((tokens[1].start, tokens[1].end), (2, 4));
        assert!(!tokens[0].is_particle);
        assert!(tokens[1].is_particle);
    }

    #[test]
    fn test_whitespace_consumes_offsets() {
        let processor = KoreanProcessor::new();
        let text = "저는  학교에서 공부해요";
        let tokens = processor.segment(text);

        assert_eq!(texts(&tokens), vec!["저", "는", "학교", "에서", "공부해", "요"]);
        assert_eq!((tokens[2].start, tokens[2].end), (4, 6));
        assert_eq!((tokens[5].start, tokens[5].end), (12, 13));

        // Tokens plus the gaps between them rebuild the text
        let mut rebuilt = String::new();
        let mut pos = 0;
        for token in &tokens {
            let gap = slice_chars(text, pos, token.start);
            assert!(gap.chars().all(char::is_whitespace));
            rebuilt.push_str(&gap);
            assert_eq!(slice_chars(text, token.start, token.end), token.text);
            rebuilt.push_str(&token.text);
            pos = token.end;
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_single_character_word_never_splits() {
        let processor = KoreanProcessor::new();
        let tokens = processor.segment("나 는");
        assert_eq!(texts(&tokens), vec!["나", "는"]);
        assert!(tokens.iter().all(|t| !t.is_particle));
    }

    #[test]
    fn test_empty_and_blank() {
        let processor = KoreanProcessor::new();
        assert!(processor.segment("").is_empty());
        assert!(processor.segment(" \n\t").is_empty());
    }

    #[test]
    fn test_extra_particles_from_config() {
        let config = SegmentationConfig {
            korean_extra_particles: vec!["한테서".to_string()],
            ..Default::default()
        };
        let processor = KoreanProcessor::with_config(&config);
        assert_eq!(texts(&processor.segment("친구한테서")), vec!["친구", "한테서"]);
    }

    #[test]
    fn test_citation_candidate_first() {
        let processor = KoreanProcessor::new();
        let candidates = processor.lookup_candidates("좋아해요");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].query, "좋아하다");
        assert!(candidates[0].conjugation.as_ref().unwrap().is_irregular_class);
        assert_eq!(candidates[1].query, "좋아해요");
        assert_eq!(candidates[1].conjugation, candidates[0].conjugation);

        let candidates = processor.lookup_candidates("학교");
        assert_eq!(candidates, vec![LookupCandidate::surface("학교")]);
    }

    #[test]
    fn test_miss_hint() {
        let processor = KoreanProcessor::new();
        assert_eq!(processor.miss_hint("김민수"), Some(NAME_HINT));
        assert_eq!(processor.miss_hint("뷁"), Some(UNKNOWN_HINT));
    }

    #[test]
    fn test_embedded_particle_entry() {
        let processor = KoreanProcessor::new();
        let entry = processor.embedded().lookup_exact("에서").cloned().unwrap();
        assert_eq!(entry.glosses[0], "location marker (for actions)");
        assert_eq!(entry.part_of_speech, vec!["particle"]);
    }
}
