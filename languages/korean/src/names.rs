/// Most common Korean family names, one syllable each
pub const FAMILY_NAMES: &[char] = &[
    '김', '이', '박', '최', '정', '강', '조', '윤', '장', '임', '한', '오', '서', '신', '권', '황',
    '안', '송', '전', '홍', '유', '고', '문', '양', '손', '배', '백', '허', '남', '심', '노', '하',
    '곽', '성', '차', '주', '우', '구', '민',
];

/// Two to four syllables starting with a common family name
pub fn is_likely_name(word: &str) -> bool {
    let count = word.chars().count();
    (2..=4).contains(&count) && word.chars().next().is_some_and(|c| FAMILY_NAMES.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likely_names() {
        assert!(is_likely_name("김민수"));
        assert!(is_likely_name("박지"));
        assert!(!is_likely_name("김"));
        assert!(!is_likely_name("김가나다라"));
        assert!(!is_likely_name("사과"));
    }
}
