//! Client error types.

use thiserror::Error;

/// Errors raised by the transport layer.
///
/// `submit` returns a backend-reported failure (`code != 0`) as a plain
/// `RawResult`; only the convenience calls built on it raise `Backend`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("backend returned code {code}: {message}")]
    Backend { code: i64, message: String },
}

/// Convenience alias for client results.
pub type ClientResult<T> = Result<T, ClientError>;
