// src/error.rs

//! Unified error handling for the bot.

use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Fatal startup errors.
///
/// Once the loop is running nothing propagates this far; recoverable
/// failures stay inside [`FetchError`] and [`NotifyError`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Failure kinds for one status fetch.
///
/// The driver switches on these explicitly; the fetcher never panics and
/// never maps a failure to an empty response.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Could not reach the server at all
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// The request ran past the client timeout
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Any other transport-level failure
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server answered with HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the expected JSON document
    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Classify a transport failure into the closed taxonomy.
    pub fn from_request(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connect(err)
        } else if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }
}

/// Failure kinds for one chat notification.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The Bot API call did not complete
    #[error("telegram request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Bot API rejected the message
    #[error("telegram API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
