use std::path::Path;

use crate::dictionary::{Lexicon, LexiconDocument};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub struct LexiconLoader;

impl LexiconLoader {
    /// Load the lexicon compiled into the binary
    pub fn load_embedded() -> Result<Lexicon, LoadError> {
        let json = include_str!("../data/lexicon.json");
        tracing::info!("Loading embedded Ukrainian lexicon...");
        let lexicon = Lexicon::from_json(json)?;
        tracing::info!(
            "Loaded {} lexemes, {} word forms",
            lexicon.entry_count(),
            lexicon.form_count()
        );
        Ok(lexicon)
    }

    /// Read a lexicon document from file path
    pub fn load_from_file(path: &Path) -> Result<LexiconDocument, LoadError> {
        tracing::info!("Loading lexicon from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        LexiconDocument::from_json(&json)
    }

    /// Merge a document into `base`, leaving `base` untouched on error
    pub fn merge(base: &mut Lexicon, additional: LexiconDocument) -> Result<usize, LoadError> {
        let added = base.extend(additional)?;
        tracing::info!("Merged {} lexemes", added);
        Ok(added)
    }
}
