//! Error taxonomy for the clinic HTTP client.

use thiserror::Error;

/// Errors surfaced by `ClinicClient` calls.
///
/// Controllers collapse every variant into their transport-failure render
/// branch; the variants exist so diagnostics can tell a dead server from a
/// slow one or a malformed payload.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot reach the clinic server at {0}")]
    Connection(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("server returned error (status {status}): {body}")]
    Server { status: u16, body: String },

    #[error("malformed server response: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("unknown appointment status: {0}")]
    UnknownStatus(String),
}
