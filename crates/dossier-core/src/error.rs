//! # Error Types
//!
//! Errors for the core analysis pipeline. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! The pipeline itself is total: tokenization, vectorization, section
//! labeling, and diffing cannot fail on any input text. The only rejection
//! point in this crate is configuration validation.

use thiserror::Error;

/// Error type for the core analysis pipeline.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The similarity threshold is not a finite number.
    ///
    /// A NaN threshold would make every comparison silently pass
    /// (`score < NaN` is always false), turning the matcher into a no-op.
    #[error("similarity threshold must be finite, got {0}")]
    InvalidThreshold(f64),
}
