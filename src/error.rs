//! Error types for the Polybius and Playfair ciphers.

use thiserror::Error;

/// Errors produced by the cipher engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Text that must be read as digraphs has an odd number of symbols.
    #[error("text must be grouped in twos (got {length} characters)")]
    GroupSize {
        /// Number of symbols in the offending text, after normalization.
        length: usize,
    },
    /// A configuration document could not be parsed.
    #[error("invalid cipher configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CipherError {
    fn from(error: serde_json::Error) -> Self {
        CipherError::Config(error.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
