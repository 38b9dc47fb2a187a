pub mod embedded;
pub mod hanzi;
pub mod processor;
pub mod tone;

pub use embedded::embedded_dictionary;
pub use hanzi::{has_chinese, is_hanzi};
pub use processor::ChineseProcessor;
pub use tone::render_tone;
