//! Vocabulary file loading
//!
//! A vocabulary file replaces the built-in skill list:
//!
//! ```toml
//! skills = ["rust", "go", "c++"]
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ScanError;
use crate::skills::Vocabulary;

/// On-disk shape of a vocabulary file
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyFile {
    /// Skills in output order
    pub skills: Vec<String>,
}

impl VocabularyFile {
    /// Parse vocabulary TOML. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ScanError> {
        toml::from_str(content).map_err(|source| ScanError::VocabularyParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a vocabulary file, then normalize it
    pub fn load(path: &Path) -> Result<Vocabulary, ScanError> {
        let content = fs::read_to_string(path).map_err(|source| ScanError::VocabularyRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file = Self::parse(&content, path)?;
        let vocabulary = Vocabulary::new(file.skills)?;
        info!(path = %path.display(), skills = vocabulary.len(), "loaded vocabulary");
        Ok(vocabulary)
    }
}
