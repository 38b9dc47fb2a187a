/// Whether a character is Hangul (syllables or jamo)
pub fn is_hangul(c: char) -> bool {
    matches!(c as u32,
        0xAC00..=0xD7A3      // Hangul Syllables
        | 0x1100..=0x11FF    // Hangul Jamo
        | 0x3130..=0x318F    // Hangul Compatibility Jamo
        | 0xA960..=0xA97F    // Hangul Jamo Extended-A
        | 0xD7B0..=0xD7FF    // Hangul Jamo Extended-B
    )
}

pub fn has_korean(text: &str) -> bool {
    text.chars().any(is_hangul)
}
