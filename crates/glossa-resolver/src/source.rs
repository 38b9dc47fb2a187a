use std::path::{Path, PathBuf};

use glossa_core::dictionary::DictionaryIndex;
use glossa_core::error::LoadError;

/// Where the full dictionary index comes from. `load` blocks and is run off
/// the async runtime.
pub trait IndexSource: Send + Sync {
    fn describe(&self) -> String;

    fn load(&self) -> Result<DictionaryIndex, LoadError>;
}

/// Index artifact on disk
#[derive(Debug, Clone)]
pub struct FileIndexSource {
    path: PathBuf,
}

impl FileIndexSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IndexSource for FileIndexSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<DictionaryIndex, LoadError> {
        DictionaryIndex::load_from_file(&self.path)
    }
}
