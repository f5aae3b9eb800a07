//! Error types for the autocomplete widget.

use thiserror::Error;

/// Errors surfaced by the suggestion fetch and normalization pipeline.
///
/// Transport failures come from the caller-supplied fetch function and are
/// stored on the model without disturbing the currently rendered list. A
/// shape mismatch between the configured mode and the received result set is
/// reported instead of rendering garbage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The remote fetch function failed.
    #[error("suggestion fetch failed: {0}")]
    Transport(String),

    /// The result set shape does not match the configured mode.
    ///
    /// Raised when a grouped widget receives a flat result set or vice
    /// versa.
    #[error("malformed result set: expected {expected} results, got {got}")]
    MalformedResult {
        /// Shape required by the widget configuration.
        expected: &'static str,
        /// Shape actually received from the fetch.
        got: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "suggestion fetch failed: connection refused"
        );

        let err = Error::MalformedResult {
            expected: "grouped",
            got: "flat",
        };
        assert_eq!(
            err.to_string(),
            "malformed result set: expected grouped results, got flat"
        );
    }
}
