use std::sync::LazyLock;

use regex::Regex;

/// Meanings kept for a per-character breakdown
pub const BREAKDOWN_MEANINGS: usize = 3;

static CROSS_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[\w\s]+\]").expect("invalid cross-reference pattern"));
static LONG_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]{20,}\)").expect("invalid parenthetical pattern"));
static REPEATED_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*;\s*;+").expect("invalid separator pattern"));
static TRAILING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*$").expect("invalid trailing separator pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("invalid tag pattern"));
static EMPTY_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("invalid empty parens pattern"));

/// How much of a definition to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefinitionBudget {
    /// Main popup definition: everything, minus cross references
    #[default]
    Full,
    /// Per-character breakdown: no long asides, first few meanings only
    Breakdown,
}

/// Strip cross-reference annotations such as `[ye3]` or `[zai4 ze2]` and
/// truncate to the display budget.
pub fn clean_definition(definition: &str, budget: DefinitionBudget) -> String {
    let mut cleaned = CROSS_REFERENCE.replace_all(definition, "").into_owned();

    if budget == DefinitionBudget::Breakdown {
        cleaned = LONG_PARENTHETICAL.replace_all(&cleaned, "").into_owned();
        cleaned = cleaned
            .split(';')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .take(BREAKDOWN_MEANINGS)
            .collect::<Vec<_>>()
            .join("; ");
    }

    cleaned = REPEATED_SEPARATOR.replace_all(&cleaned, ";").into_owned();
    cleaned = TRAILING_SEPARATOR.replace_all(&cleaned, "").into_owned();
    cleaned = WHITESPACE.replace_all(&cleaned, " ").into_owned();
    cleaned.trim().to_string()
}

/// Reduce HTML / wiki markup from remote glosses to plain text
pub fn strip_markup(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = HTML_TAG.replace_all(text, " ");
    let cleaned = cleaned
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ");
    let cleaned = EMPTY_PARENS.replace_all(&cleaned, "");
    WHITESPACE.replace_all(&cleaned, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "again; once more; re-; (before an adjective) more; how ... (followed by an adjective or verb, and then (usually) 也[ye3] or 都[dou1] for emphasis); (used to introduce additional information, as in 再則|再则[zai4 ze2] etc); (literary) to reappear";

    #[test]
    fn test_full_budget_removes_cross_references() {
        let cleaned = clean_definition(RAW, DefinitionBudget::Full);
        assert!(!cleaned.contains("[ye3]"));
        assert!(!cleaned.contains("[zai4 ze2]"));
        assert!(cleaned.starts_with("again; once more; re-;"));
        assert!(cleaned.ends_with("to reappear"));
    }

    #[test]
    fn test_breakdown_keeps_three_meanings() {
        let cleaned = clean_definition(RAW, DefinitionBudget::Breakdown);
        assert_eq!(cleaned, "again; once more; re-");
    }

    #[test]
    fn test_breakdown_drops_long_parentheticals() {
        let cleaned = clean_definition(
            "to be born (used in a rather long aside here); life",
            DefinitionBudget::Breakdown,
        );
        assert_eq!(cleaned, "to be born; life");
    }

    #[test]
    fn test_separator_cleanup() {
        assert_eq!(
            clean_definition("one ; ;  two;", DefinitionBudget::Full),
            "one; two"
        );
    }

    #[test]
    fn test_strip_markup() {
        let html = r#"<a rel="mwWikiLink" href="./x">school</a> &amp; <i>academy</i> ( )"#;
        assert_eq!(strip_markup(html), "school & academy");
    }
}
