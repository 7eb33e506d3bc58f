//! Error types for the draw mechanics.

/// Errors that can occur while drawing from the bag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// A wood declaration outside the allowed 1-5 range.
    #[error("declaration must be between 1 and 5, got {0}")]
    InvalidDeclaration(u32),

    /// More tokens were requested than the bag holds.
    #[error("cannot draw {requested} tokens from a bag of {available}")]
    NotEnoughTokens {
        /// Number of tokens asked for.
        requested: usize,
        /// Number of tokens in the bag.
        available: usize,
    },
}

/// Convenience result type for draw operations.
pub type DrawResult<T> = Result<T, DrawError>;
