/// Whether a character is a kanji
pub fn is_kanji(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FAF      // CJK Unified Ideographs
        | 0x3400..=0x4DBF    // CJK Extension A
        | 0x20000..=0x2A6DF  // CJK Extension B
        | 0x2A700..=0x2B73F  // CJK Extension C
        | 0x2B740..=0x2B81F  // CJK Extension D
        | 0x2B820..=0x2CEAF  // CJK Extension E
        | 0xF900..=0xFAFF    // CJK Compatibility Ideographs
        | 0x2F800..=0x2FA1F  // CJK Compatibility Ideographs Supplement
    )
}

pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}')
}

pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}')
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn has_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

/// Distinct kanji in order of first appearance
pub fn extract_kanji(text: &str) -> Vec<char> {
    let mut kanji = Vec::new();
    for c in text.chars().filter(|c| is_kanji(*c)) {
        if !kanji.contains(&c) {
            kanji.push(c);
        }
    }
    kanji
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_classes() {
        assert!(is_kanji('食'));
        assert!(!is_kanji('た'));
        assert!(is_hiragana('た'));
        assert!(is_katakana('カ'));
        assert!(is_kana('ー'));
        assert!(!is_kana('a'));
    }

    #[test]
    fn test_extract_kanji_is_unique_and_ordered() {
        assert_eq!(extract_kanji("日本の日曜日"), vec!['日', '本', '曜']);
        assert!(has_kanji("食べる"));
        assert!(!has_kanji("たべる"));
    }
}
