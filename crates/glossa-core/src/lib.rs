pub mod clean;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod lookup;
pub mod preprocess;
pub mod segment;
