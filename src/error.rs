/// Error types for Tab State QR
use thiserror::Error;

/// Every failure the core can surface to a caller.
///
/// None of these are retried; the caller decides how to report them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabStateError {
    /// The token could not be turned back into legible text
    #[error("Invalid token: {0}")]
    Decode(String),

    /// Pasted input matched none of the accepted formats
    #[error("Unrecognized input: {0}")]
    Parse(String),

    /// No history entry carries the requested id
    #[error("History entry not found: {0}")]
    NotFound(u64),

    /// Reading or writing the persisted history failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The tab inventory or tab creation call failed
    #[error("Tab operation failed: {0}")]
    Tabs(String),
}

pub type Result<T> = std::result::Result<T, TabStateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TabStateError::Decode("bad base64".to_string()).to_string(),
            "Invalid token: bad base64"
        );
        assert_eq!(
            TabStateError::NotFound(42).to_string(),
            "History entry not found: 42"
        );
    }
}
