use glossa_core::dictionary::EmbeddedDictionary;
use glossa_core::language::LanguageTag;

/// Pronouns, particles and common words kept resident for the fast path
pub fn embedded_dictionary() -> EmbeddedDictionary {
    let json = include_str!("../data/embedded.json");
    EmbeddedDictionary::from_json("JMdict basic", LanguageTag::Japanese, json)
}
