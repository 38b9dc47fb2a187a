use glossa_core::dictionary::EmbeddedDictionary;
use glossa_core::language::LanguageTag;

/// Common words kept resident for the fast path, keyed by simplified form.
/// Readings are numbered pinyin, like full CC-CEDICT artifacts.
pub fn embedded_dictionary() -> EmbeddedDictionary {
    let json = include_str!("../data/embedded.json");
    EmbeddedDictionary::from_json("CC-CEDICT basic", LanguageTag::Chinese, json)
}
