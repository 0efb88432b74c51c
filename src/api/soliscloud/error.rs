use reqwest::StatusCode;
use thiserror::Error;

/// Client-side error taxonomy.
///
/// An authentication failure is not a separate variant: the server rejects a
/// bad signature with a non-2xx status, which surfaces as [`ApiError::Status`]
/// like any other HTTP-level rejection.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required argument was missing. No request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The payload could not be serialized. No request was sent.
    #[error("failed to serialize the request payload")]
    Serialize(#[source] serde_json::Error),

    /// The request could not be sent, or the response body could not be read.
    #[error("transport failure")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The server claimed success but the body is not valid JSON.
    #[error("failed to decode the response body")]
    Decode(#[source] serde_json::Error),
}
