//! Error types for building Huffman code tables.

use thiserror::Error;

/// Error variants for tree construction and code table derivation.
#[derive(Debug, Error)]
pub enum Error {
    /// The merge counter went past the allowed budget.
    #[error("Huffman tree exceeded max length: {merges} (budget {max})")]
    TreeTooLarge { merges: usize, max: usize },

    /// Extraction was attempted on an empty priority queue.
    #[error("extract from an empty priority queue")]
    EmptyQueue,

    /// Reading the input text failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for code table operations.
pub type Result<T> = std::result::Result<T, Error>;
