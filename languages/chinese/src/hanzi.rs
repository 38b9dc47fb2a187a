/// Whether a character is a Chinese character (hanzi)
pub fn is_hanzi(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FAF      // CJK Unified Ideographs
        | 0x3400..=0x4DBF    // CJK Extension A
        | 0x20000..=0x2A6DF  // CJK Extension B
        | 0xF900..=0xFAFF    // CJK Compatibility Ideographs
    )
}

pub fn has_chinese(text: &str) -> bool {
    text.chars().any(is_hanzi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hanzi_detection() {
        assert!(is_hanzi('学'));
        assert!(is_hanzi('𠀀'));
        assert!(!is_hanzi('a'));
        assert!(!is_hanzi('の'));
        assert!(has_chinese("abc学"));
        assert!(!has_chinese("hello"));
    }
}
