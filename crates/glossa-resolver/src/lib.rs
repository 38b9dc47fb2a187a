pub mod resolver;
pub mod source;


pub use resolver::{DEFAULT_REMOTE_TIMEOUT, TieredResolver};
pub use source::{FileIndexSource, IndexSource};
