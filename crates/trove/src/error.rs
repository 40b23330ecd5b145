//! Client Errors
//!
//! The knowledge-base server's responses are never inspected, so a
//! non-2xx status is not an error here; the only thing that can fail is
//! the exchange itself.

use thiserror::Error;

/// Errors from the knowledge-base client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout). No navigation takes place when this happens.
    #[error("knowledge-base request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
