//! Error types for skill extraction

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the `skillscan` command
#[derive(Debug, Error)]
pub enum ScanError {
    /// Wrong number of arguments or an unrecognized flag
    #[error("{usage}")]
    Usage {
        /// Rendered usage text
        usage: String,
    },

    /// The input file could not be opened, read or decoded as UTF-8
    #[error("Error reading file: {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The vocabulary file could not be read
    #[error("Error reading vocabulary: {}: {source}", .path.display())]
    VocabularyRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The vocabulary file is not valid TOML or lacks a `skills` list
    #[error("Error parsing vocabulary: {}: {source}", .path.display())]
    VocabularyParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No usable entries remained after normalization
    #[error("Vocabulary contains no skills")]
    EmptyVocabulary,

    /// A vocabulary entry could not be compiled into a matcher
    #[error("Invalid skill pattern for '{skill}': {source}")]
    InvalidPattern {
        skill: String,
        #[source]
        source: regex::Error,
    },

    /// A report could not be serialized as JSON
    #[error("Error rendering report: {0}")]
    RenderJson(#[from] serde_json::Error),

    /// A report could not be written as CSV
    #[error("Error rendering report: {0}")]
    RenderCsv(#[from] csv::Error),
}

impl ScanError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}
