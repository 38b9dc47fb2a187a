use crate::language::{LanguageProcessor, LanguageTag, Token};

/// A maximal run of whitespace or non-whitespace characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub is_whitespace: bool,
}

/// Split text into alternating whitespace / non-whitespace runs.
///
/// Offsets are codepoint indices; the runs cover the text without gaps.
pub fn split_runs(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut current_is_ws = false;
    let mut start = 0;
    let mut pos = 0;

    for c in text.chars() {
        let is_ws = c.is_whitespace();
        if !current.is_empty() && is_ws != current_is_ws {
            runs.push(Run {
                text: std::mem::take(&mut current),
                start,
                end: pos,
                is_whitespace: current_is_ws,
            });
        }
        if current.is_empty() {
            start = pos;
            current_is_ws = is_ws;
        }
        current.push(c);
        pos += 1;
    }

    if !current.is_empty() {
        runs.push(Run {
            text: current,
            start,
            end: pos,
            is_whitespace: current_is_ws,
        });
    }

    runs
}

/// One token per codepoint
pub fn segment_characters(text: &str) -> Vec<Token> {
    text.chars()
        .enumerate()
        .map(|(i, c)| Token::new(c.to_string(), i, i + 1))
        .collect()
}

/// Whitespace and non-whitespace runs, both kept, so concatenation is exact.
/// Punctuation stays attached to its word.
pub fn segment_whitespace(text: &str) -> Vec<Token> {
    split_runs(text)
        .into_iter()
        .map(|run| Token::new(run.text, run.start, run.end))
        .collect()
}

/// Greedy longest-match segmentation against a dictionary.
///
/// At each position the longest substring (up to `max_window` codepoints)
/// accepted by `is_known` becomes a token; otherwise a single codepoint does.
pub fn segment_longest_match(
    text: &str,
    max_window: usize,
    is_known: impl Fn(&str) -> bool,
) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let mut len = 1;
        for candidate in (2..=max_window.min(chars.len() - i)).rev() {
            let surface: String = chars[i..i + candidate].iter().collect();
            if is_known(&surface) {
                len = candidate;
                break;
            }
        }
        let surface: String = chars[i..i + len].iter().collect();
        tokens.push(Token::new(surface, i, i + len));
        i += len;
    }

    tokens
}

/// Substring by codepoint offsets
pub fn slice_chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Fallback processor for space-delimited languages
pub struct WhitespaceProcessor {
    language: LanguageTag,
}

impl WhitespaceProcessor {
    pub fn new(language: LanguageTag) -> Self {
        Self { language }
    }
}

impl LanguageProcessor for WhitespaceProcessor {
    fn language(&self) -> LanguageTag {
        self.language.clone()
    }

    fn segment(&self, text: &str) -> Vec<Token> {
        segment_whitespace(text)
    }
}
