pub mod deconjugator;
pub mod embedded;
pub mod furigana;
pub mod jlpt;
pub mod kana;
pub mod processor;

pub use deconjugator::JapaneseDeconjugator;
pub use embedded::embedded_dictionary;
pub use furigana::FuriganaState;
pub use jlpt::{JlptLevel, JlptLevels};
pub use kana::{extract_kanji, has_kanji, is_kana, is_kanji};
pub use processor::JapaneseProcessor;
