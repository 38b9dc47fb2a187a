pub mod conjugation;
pub mod embedded;
pub mod hangul;
pub mod names;
pub mod particles;
pub mod processor;

pub use conjugation::EndingTable;
pub use embedded::embedded_dictionary;
pub use hangul::{has_korean, is_hangul};
pub use names::is_likely_name;
pub use particles::ParticleTable;
pub use processor::KoreanProcessor;
