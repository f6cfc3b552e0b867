//! # Taxonomy Error Types
//!
//! Structured errors for taxonomy loading. Uses `thiserror` for
//! ergonomic error definitions with diagnostic context. All of these are
//! fatal to engine construction — a partial or default taxonomy is never
//! tolerated.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading the rule taxonomy.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    /// The taxonomy source does not exist.
    #[error("taxonomy not found at {0}")]
    NotFound(PathBuf),

    /// The taxonomy source exists but could not be read.
    #[error("failed to read taxonomy: {0}")]
    Io(#[from] std::io::Error),

    /// The content does not parse into the expected structural shape.
    #[error("malformed taxonomy: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required top-level key is absent.
    #[error("taxonomy is missing required key `{0}`")]
    MissingKey(&'static str),
}

/// Result alias for taxonomy operations.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;
