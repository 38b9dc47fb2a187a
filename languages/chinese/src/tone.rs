//! Numbered pinyin (`cheng2 gong1`) to tone-mark pinyin (`chéng gōng`).

/// Index 0 is the bare vowel (also used for the neutral tone 5)
const A: [char; 5] = ['a', 'ā', 'á', 'ǎ', 'à'];
const E: [char; 5] = ['e', 'ē', 'é', 'ě', 'è'];
const I: [char; 5] = ['i', 'ī', 'í', 'ǐ', 'ì'];
const O: [char; 5] = ['o', 'ō', 'ó', 'ǒ', 'ò'];
const U: [char; 5] = ['u', 'ū', 'ú', 'ǔ', 'ù'];
const U_UMLAUT: [char; 5] = ['ü', 'ǖ', 'ǘ', 'ǚ', 'ǜ'];

fn marks_for(vowel: char) -> Option<&'static [char; 5]> {
    match vowel {
        'a' => Some(&A),
        'e' => Some(&E),
        'i' => Some(&I),
        'o' => Some(&O),
        'u' => Some(&U),
        // v is the keyboard stand-in for ü
        'ü' | 'v' => Some(&U_UMLAUT),
        _ => None,
    }
}

/// Render every whitespace-separated syllable of numbered pinyin with tone marks.
///
/// Syllables without a trailing tone digit pass through unchanged.
pub fn render_tone(pinyin: &str) -> String {
    pinyin
        .split_whitespace()
        .map(render_syllable)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one `<letters><1-5>` syllable
pub fn render_syllable(syllable: &str) -> String {
    // CC-CEDICT writes ü as u:
    let syllable = syllable.replace("u:", "ü").replace("U:", "Ü");

    let mut chars: Vec<char> = syllable.chars().collect();
    let tone = match chars.last().and_then(|c| c.to_digit(10)) {
        Some(t @ 1..=5) => t as usize,
        _ => return syllable,
    };
    chars.pop();

    if chars.is_empty() || !chars.iter().all(|c| c.is_ascii_alphabetic() || matches!(c, 'ü' | 'Ü')) {
        return syllable;
    }

    let lower: Vec<char> = chars.iter().map(|c| c.to_lowercase().next().unwrap_or(*c)).collect();

    match marked_vowel(&lower) {
        Some(index) => {
            apply_tone(&mut chars, &lower, index, tone);
            chars.into_iter().collect()
        }
        // No vowel: drop the digit only
        None => chars.into_iter().collect(),
    }
}

/// Position of the vowel carrying the mark:
/// a > e > o of "ou" > second vowel of "iu" > second vowel of "ui" > first of o, u, ü, v, i
fn marked_vowel(lower: &[char]) -> Option<usize> {
    let first = |v: char| lower.iter().position(|&c| c == v);
    let pair = |a: char, b: char| lower.windows(2).position(|w| w[0] == a && w[1] == b);

    if let Some(i) = first('a') {
        return Some(i);
    }
    if let Some(i) = first('e') {
        return Some(i);
    }
    if let Some(i) = pair('o', 'u') {
        return Some(i);
    }
    if let Some(i) = pair('i', 'u') {
        return Some(i + 1);
    }
    if let Some(i) = pair('u', 'i') {
        return Some(i + 1);
    }
    ['o', 'u', 'ü', 'v', 'i'].into_iter().find_map(first)
}

fn apply_tone(chars: &mut [char], lower: &[char], index: usize, tone: usize) {
    let Some(marks) = marks_for(lower[index]) else {
        return;
    };
    let mark = marks[tone % 5];

    chars[index] = if chars[index].is_uppercase() {
        mark.to_uppercase().next().unwrap_or(mark)
    } else {
        mark
    };
}
