//! Error types for sample value generation.

use thiserror::Error;

/// Errors raised while turning generator output into seed rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The generator kept producing blank sentences.
    #[error("failed to generate a non-blank sentence after {max_attempts} attempts")]
    BlankSentence {
        /// Number of draws made before giving up.
        max_attempts: usize,
    },

    /// The generator kept producing blank person names.
    #[error("failed to generate a non-blank person name after {max_attempts} attempts")]
    BlankPersonName {
        /// Number of draws made before giving up.
        max_attempts: usize,
    },
}
