//! Error types for the morfo analyzer

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for morfo operations
#[derive(Debug, Error)]
pub enum MorfoError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Morpheme dictionary file missing
    #[error("morpheme dictionary not found: {path}")]
    DictionaryNotFound {
        /// Path that was probed
        path: PathBuf,
    },

    /// Dictionary file parsed to zero usable rows
    #[error("morpheme dictionary {path} contains no valid entries")]
    EmptyDictionary {
        /// Path that was loaded
        path: PathBuf,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for morfo operations
pub type Result<T> = std::result::Result<T, MorfoError>;
