use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JlptLevel {
    N5, // Beginner
    N4, // Elementary
    N3, // Intermediate
    N2, // Upper intermediate
    N1, // Advanced
}

impl JlptLevel {
    /// Parse `N5`..`N1`, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "N5" => Some(JlptLevel::N5),
            "N4" => Some(JlptLevel::N4),
            "N3" => Some(JlptLevel::N3),
            "N2" => Some(JlptLevel::N2),
            "N1" => Some(JlptLevel::N1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        }
    }

    /// Numeric level as stored on lookup results
    pub fn number(&self) -> u8 {
        match self {
            JlptLevel::N5 => 5,
            JlptLevel::N4 => 4,
            JlptLevel::N3 => 3,
            JlptLevel::N2 => 2,
            JlptLevel::N1 => 1,
        }
    }
}

/// Word to JLPT level table
#[derive(Debug, Default)]
pub struct JlptLevels {
    levels: HashMap<String, JlptLevel>,
}

impl JlptLevels {
    /// The table compiled into the crate
    pub fn embedded() -> Self {
        Self::from_tsv(include_str!("../data/jlpt.tsv"))
    }

    /// `word\tlevel` lines; `#` comments and unparseable lines are skipped
    pub fn from_tsv(content: &str) -> Self {
        let levels = content
            .lines()
            .filter(|line| !line.starts_with('#'))
            .filter_map(|line| {
                let (word, level) = line.split_once('\t')?;
                Some((word.trim().to_string(), JlptLevel::parse(level)?))
            })
            .filter(|(word, _)| !word.is_empty())
            .collect();

        Self { levels }
    }

    pub fn get(&self, word: &str) -> Option<JlptLevel> {
        self.levels.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
