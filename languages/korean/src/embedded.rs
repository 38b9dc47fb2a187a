use glossa_core::dictionary::EmbeddedDictionary;
use glossa_core::language::LanguageTag;

/// Particles and copulas with grammar notes, and a handful of common words
pub fn embedded_dictionary() -> EmbeddedDictionary {
    let json = include_str!("../data/embedded.json");
    EmbeddedDictionary::from_json("Korean basic", LanguageTag::Korean, json)
}
