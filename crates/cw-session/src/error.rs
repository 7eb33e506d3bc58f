//! Error types for the session.

use thiserror::Error;

use cw_mechanics::DrawError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while handling player input.
///
/// Every variant is recoverable: report it and prompt again.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `w` was given without a count.
    #[error("specify how many tokens to draw after 'w' (e.g. w3)")]
    MissingCount,

    /// The text after `w` is not an unsigned number.
    #[error("'{0}' is not a valid wood draw; follow 'w' with a number from 1 to 5")]
    InvalidCount(String),

    /// Input matched no command.
    #[error("'{0}' is not a recognized command (try f, r, w[1-5], q or help)")]
    UnknownCommand(String),

    /// A resource name that is not tracked.
    #[error("unknown resource '{0}' (use food, water, wood or raft)")]
    UnknownResource(String),

    /// Malformed arguments to an otherwise known command.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// The draw itself was rejected.
    #[error("{0}")]
    Draw(#[from] DrawError),

    /// Journal serialization failed.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}

impl SessionError {
    /// Whether the error came from malformed command text rather than
    /// from the rules.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCount | Self::InvalidCount(_) | Self::InvalidChoice(_)
        )
    }
}
