use glossa_core::error::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source is not a valid JMdict document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Failed to write index: {0}")]
    Write(#[from] LoadError),

    #[error("No dictionary source format for language '{0}'")]
    UnsupportedLanguage(String),
}
