//! Typed errors for the literature-database layer.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of an E-utilities call.
///
/// Kept distinct from a successful zero-result search so callers can
/// tell "nothing matched" apart from "the call never worked".
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request produced no usable response: connect failure,
    /// timeout, or an undecodable body.
    #[error("pubmed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("pubmed returned HTTP {status}")]
    Status { status: StatusCode },
}

impl LookupError {
    /// Whether a bounded retry is worth attempting.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status } => status.is_server_error(),
        }
    }
}
