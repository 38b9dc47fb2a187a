use glossa_core::language::{ConjugationMatch, Deconjugator};

/// Suffix rewrite: a word ending in `suffix` may be `stem + replacement`
#[derive(Debug, Clone, Copy)]
pub struct DeconjugationRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub kind: &'static str,
    /// する / 来る forms
    pub irregular: bool,
}

const fn rule(suffix: &'static str, replacement: &'static str, kind: &'static str) -> DeconjugationRule {
    DeconjugationRule {
        suffix,
        replacement,
        kind,
        irregular: false,
    }
}

const fn irregular(suffix: &'static str, replacement: &'static str, kind: &'static str) -> DeconjugationRule {
    DeconjugationRule {
        suffix,
        replacement,
        kind,
        irregular: true,
    }
}

const RULES: &[DeconjugationRule] = &[
    // Irregular する / 来る
    irregular("します", "する", "irregular verb する, masu-form"),
    irregular("して", "する", "irregular verb する, te-form"),
    irregular("した", "する", "irregular verb する, past"),
    irregular("しない", "する", "irregular verb する, negative"),
    irregular("来ます", "来る", "irregular verb 来る, masu-form"),
    irregular("来て", "来る", "irregular verb 来る, te-form"),
    irregular("来た", "来る", "irregular verb 来る, past"),
    irregular("来ない", "来る", "irregular verb 来る, negative"),
    // i-adjectives
    rule("くない", "い", "i-adjective, negative"),
    rule("かった", "い", "i-adjective, past"),
    rule("くて", "い", "i-adjective, te-form"),
    // Godan masu-form: u-row restored from the i-row
    rule("きます", "く", "godan verb, masu-form"),
    rule("ぎます", "ぐ", "godan verb, masu-form"),
    rule("ちます", "つ", "godan verb, masu-form"),
    rule("にます", "ぬ", "godan verb, masu-form"),
    rule("びます", "ぶ", "godan verb, masu-form"),
    rule("みます", "む", "godan verb, masu-form"),
    rule("ります", "る", "godan verb, masu-form"),
    rule("います", "う", "godan verb, masu-form"),
    rule("ます", "る", "ichidan verb, masu-form"),
    // Negative: a-row back to u-row
    rule("かない", "く", "godan verb, negative"),
    rule("がない", "ぐ", "godan verb, negative"),
    rule("さない", "す", "godan verb, negative"),
    rule("たない", "つ", "godan verb, negative"),
    rule("なない", "ぬ", "godan verb, negative"),
    rule("ばない", "ぶ", "godan verb, negative"),
    rule("まない", "む", "godan verb, negative"),
    rule("らない", "る", "godan verb, negative"),
    rule("わない", "う", "godan verb, negative"),
    rule("ない", "る", "ichidan verb, negative"),
    // te-form
    rule("いて", "く", "godan verb, te-form"),
    rule("いで", "ぐ", "godan verb, te-form"),
    rule("って", "う", "godan verb, te-form"),
    rule("って", "つ", "godan verb, te-form"),
    rule("って", "る", "godan verb, te-form"),
    rule("んで", "む", "godan verb, te-form"),
    rule("んで", "ぶ", "godan verb, te-form"),
    rule("んで", "ぬ", "godan verb, te-form"),
    rule("して", "す", "godan verb, te-form"),
    rule("て", "る", "ichidan verb, te-form"),
    // ta-form
    rule("いた", "く", "godan verb, past"),
    rule("いだ", "ぐ", "godan verb, past"),
    rule("った", "う", "godan verb, past"),
    rule("った", "つ", "godan verb, past"),
    rule("った", "る", "godan verb, past"),
    rule("んだ", "む", "godan verb, past"),
    rule("んだ", "ぶ", "godan verb, past"),
    rule("んだ", "ぬ", "godan verb, past"),
    rule("した", "す", "godan verb, past"),
    rule("た", "る", "ichidan verb, past"),
    // Bare godan stems (聞き → 聞く)
    rule("き", "く", "godan verb, stem"),
    rule("ぎ", "ぐ", "godan verb, stem"),
    rule("し", "す", "godan verb, stem"),
    rule("ち", "つ", "godan verb, stem"),
    rule("に", "ぬ", "godan verb, stem"),
    rule("び", "ぶ", "godan verb, stem"),
    rule("み", "む", "godan verb, stem"),
    rule("り", "る", "godan verb, stem"),
    rule("い", "う", "godan verb, stem"),
    // Bare ichidan stem (食べ → 食べる)
    rule("", "る", "ichidan verb, stem"),
];

pub struct JapaneseDeconjugator {
    rules: Vec<DeconjugationRule>,
}

impl JapaneseDeconjugator {
    pub fn new() -> Self {
        let mut rules = RULES.to_vec();
        // Longer suffixes first; stable, so table order breaks ties
        rules.sort_by_key(|r| std::cmp::Reverse(r.suffix.chars().count()));
        Self { rules }
    }
}

impl Default for JapaneseDeconjugator {
    fn default() -> Self {
        Self::new()
    }
}

impl Deconjugator for JapaneseDeconjugator {
    /// Possible dictionary forms, longest matched ending first, without duplicates
    fn deconjugate(&self, word: &str) -> Vec<ConjugationMatch> {
        let mut results: Vec<ConjugationMatch> = Vec::new();
        let word_len = word.chars().count();

        for rule in &self.rules {
            // Only irregular forms may consume the whole word (します → する)
            let suffix_len = rule.suffix.chars().count();
            if word_len < suffix_len || (word_len == suffix_len && !rule.irregular) {
                continue;
            }
            let Some(stem) = word.strip_suffix(rule.suffix) else {
                continue;
            };

            let citation = format!("{}{}", stem, rule.replacement);
            if citation == word || results.iter().any(|r| r.citation == citation) {
                continue;
            }

            results.push(ConjugationMatch {
                stem: stem.to_string(),
                ending: rule.suffix.to_string(),
                is_irregular_class: rule.irregular,
                citation,
                kind: rule.kind.to_string(),
            });
        }

        results
    }
}
