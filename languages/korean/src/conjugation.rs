use glossa_core::language::{ConjugationMatch, Deconjugator};

/// Verb endings recognized when normalizing to the citation form
pub const DEFAULT_ENDINGS: &[&str] = &[
    // Polite informal (해요체)
    "어요", "아요", "여요", "해요",
    // Polite formal (합니다체)
    "습니다", "합니다",
    // Past
    "었어요", "았어요", "였어요", "했어요", "었습니다", "았습니다", "했습니다",
    // Casual
    "어", "아", "여", "해",
];

const PAST_MARKERS: [char; 4] = ['었', '았', '였', '했'];

#[derive(Debug, Clone)]
pub struct EndingTable {
    /// Longest first
    endings: Vec<String>,
}

impl EndingTable {
    pub fn new() -> Self {
        Self::with_extra(Vec::new())
    }

    pub fn with_extra(extra: Vec<String>) -> Self {
        let mut endings: Vec<String> = DEFAULT_ENDINGS.iter().map(|e| e.to_string()).collect();
        for ending in extra {
            if !ending.is_empty() && !endings.contains(&ending) {
                endings.push(ending);
            }
        }
        endings.sort_by_key(|e| std::cmp::Reverse(e.chars().count()));
        Self { endings }
    }

    /// Strip the longest known ending. The word must be strictly longer than it.
    pub fn detect(&self, word: &str) -> Option<ConjugationMatch> {
        let ending = self
            .endings
            .iter()
            .find(|e| word.len() > e.len() && word.ends_with(e.as_str()))?;
        let stem = &word[..word.len() - ending.len()];

        // 하다 family: 해, 했, 합
        let is_irregular_class = ending.starts_with(['해', '했', '합']);
        let citation = if is_irregular_class {
            format!("{stem}하다")
        } else {
            format!("{stem}다")
        };

        Some(ConjugationMatch {
            stem: stem.to_string(),
            ending: ending.clone(),
            is_irregular_class,
            citation,
            kind: ending_kind(ending),
        })
    }

    pub fn len(&self) -> usize {
        self.endings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endings.is_empty()
    }
}

impl Default for EndingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Deconjugator for EndingTable {
    fn deconjugate(&self, word: &str) -> Vec<ConjugationMatch> {
        self.detect(word).into_iter().collect()
    }
}

/// Speech style of an ending, prefixed with `past-` for past tense
fn ending_kind(ending: &str) -> String {
    let style = if ending.contains("니다") {
        "polite-formal"
    } else if ending.ends_with('요') {
        "polite-informal"
    } else if ending.chars().count() == 1 {
        "casual"
    } else {
        "unknown"
    };

    if ending.contains(PAST_MARKERS) {
        format!("past-{style}")
    } else {
        style.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hada_family() {
        let table = EndingTable::new();

        let m = table.detect("좋아해요").unwrap();
        assert_eq!(m.stem, "좋아");
        assert_eq!(m.ending, "해요");
        assert!(m.is_irregular_class);
        assert_eq!(m.citation, "좋아하다");
        assert_eq!(m.kind, "polite-informal");

        assert_eq!(table.detect("일해요").unwrap().citation, "일하다");
    }

    #[test]
    fn test_longest_ending_first() {
        let table = EndingTable::new();

        let m = table.detect("공부했어요").unwrap();
        assert_eq!(m.ending, "했어요");
        assert_eq!(m.citation, "공부하다");
        assert_eq!(m.kind, "past-polite-informal");

        let m = table.detect("먹었습니다").unwrap();
        assert_eq!(m.ending, "었습니다");
        assert_eq!(m.citation, "먹다");
        assert!(!m.is_irregular_class);
        assert_eq!(m.kind, "past-polite-formal");
    }

    #[test]
    fn test_casual_and_regular() {
        let table = EndingTable::new();

        let m = table.detect("먹어").unwrap();
        assert_eq!(m.citation, "먹다");
        assert_eq!(m.kind, "casual");

        let m = table.detect("공부해").unwrap();
        assert_eq!(m.citation, "공부하다");
        assert!(m.is_irregular_class);
    }

    #[test]
    fn test_word_must_be_longer_than_ending() {
        let table = EndingTable::new();
        assert!(table.detect("해요").is_none());
        assert!(table.detect("어").is_none());
        assert!(table.detect("학교").is_none());
        assert!(table.deconjugate("").is_empty());
    }

    #[test]
    fn test_endings_are_whole_syllables() {
        let syllable = |c: char| ('가'..='힣').contains(&c);
        assert!(DEFAULT_ENDINGS.iter().all(|e| e.chars().all(syllable)));

        // ㅂ니다 would need syllable decomposition; 갑 carries the ㅂ final
        let table = EndingTable::new();
        assert!(table.detect("갑니다").is_none());
        assert_eq!(table.detect("먹습니다").unwrap().citation, "먹다");
    }

    #[test]
    fn test_extra_endings() {
        let table = EndingTable::with_extra(vec!["세요".to_string()]);
        let m = table.detect("가세요").unwrap();
        assert_eq!(m.citation, "가다");
        assert_eq!(m.kind, "polite-informal");
    }
}
