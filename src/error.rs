//! Error types for fastapack

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fastapack operations
pub type Result<T> = std::result::Result<T, FastapackError>;

/// Error types that can occur in fastapack
#[derive(Debug, Error)]
pub enum FastapackError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input path does not exist (checked before any line is read)
    #[error("input file is missing: {}", .path.display())]
    MissingInput {
        /// Path that was requested
        path: PathBuf,
    },

    /// Non-canonical base encountered while packing a sequence
    #[error("invalid base {base:?} in sequence '{header}': expected A, C, G, or T")]
    InvalidBase {
        /// Header of the record that contained the base
        header: String,
        /// The offending character
        base: char,
    },

    /// Raw packed data requested from a record stored as plain text
    #[error("sequence '{header}' is not bit-packed; use sequence() instead")]
    NotPacked {
        /// Header of the record that was queried
        header: String,
    },

    /// A parse call would mix text and packed records in one store
    #[error("store already holds {existing} records; text and packed parses cannot be mixed")]
    MixedStore {
        /// Representation already present in the store
        existing: &'static str,
    },
}
