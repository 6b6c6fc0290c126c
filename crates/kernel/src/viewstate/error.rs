//! View-state error types.

use thiserror::Error;

/// Errors raised while restoring or decoding persisted view state.
#[derive(Debug, Error)]
pub enum StateError {
    /// A snapshot did not have the shape its consumer expects.
    #[error("malformed snapshot: expected {expected}, found {found}")]
    Malformed {
        expected: &'static str,
        found: &'static str,
    },

    /// The encoded token was not valid base64.
    #[error("view state token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded payload was not a valid snapshot.
    #[error("view state payload could not be parsed: {0}")]
    Json(#[from] serde_json::Error),

    /// The token carries no signature although a signing key is configured.
    #[error("view state token is missing its signature")]
    Unsigned,

    /// The token signature does not match its payload.
    #[error("view state signature mismatch")]
    Tampered,

    /// The configured signing key was rejected by the MAC implementation.
    #[error("invalid view state signing key")]
    InvalidKey,
}

/// Result type alias using StateError.
pub type StateResult<T> = Result<T, StateError>;
