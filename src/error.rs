use std::time::Duration;

/// Everything that can go wrong during one exchange. All variants are
/// recoverable at the caller: report the message and keep the session
/// going.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("nothing to send: the audio clip is empty")]
    EmptyInput,

    #[error("API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
