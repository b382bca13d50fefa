use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Result type returned by every API call.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while talking to the Ticketmatic API.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read.
    #[error("unable to send request: {0}")]
    Http(#[from] reqwest_middleware::Error),
    /// A body could not be encoded or a response could not be decoded.
    #[error("unable to parse API payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The configured server is not a usable base URL.
    #[error("invalid server URL: {0}")]
    Url(String),
    /// The URL template contains a placeholder no value was given for.
    #[error("no value for URL parameter {{{0}}}")]
    MissingUrlParameter(String),
    /// The API did not answer in time.
    #[error("no response from API within {0:?}")]
    Timeout(std::time::Duration),
    /// The API answered with an empty body where a value was expected.
    #[error("empty response from API")]
    EmptyResponse,
    /// The API rejected the request.
    #[error(transparent)]
    Request(#[from] RequestError),
    /// Too many requests: the call was queued by the API.
    #[error("rate limited by API, retry in {}s", .0.backoff)]
    RateLimit(QueueStatus),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Http(value.into())
    }
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Self {
        Error::Url(value.to_string())
    }
}

/// RequestError is returned for any unsuccessful status code other than 429.
///
/// When the API sends a JSON error object, its message, application code and extra data
/// are filled in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Error)]
pub struct RequestError {
    /// HTTP status code of the response.
    #[serde(skip)]
    pub status: u16,
    /// Raw response body.
    #[serde(skip)]
    pub body: String,
    /// Human readable message sent by the API.
    #[serde(default)]
    pub message: Option<String>,
    /// Application specific error code.
    #[serde(default)]
    pub code: Option<i64>,
    /// Extra information attached to the error.
    #[serde(default)]
    pub data: Option<Value>,
}

impl RequestError {
    pub(crate) fn from_response(status: u16, body: String) -> RequestError {
        let parsed = serde_json::from_str::<RequestError>(&body).unwrap_or_default();
        RequestError {
            status,
            body,
            ..parsed
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "Bad response from API: {} - {}", self.status, message),
            None => write!(f, "Bad response from API: {} - {}", self.status, self.body),
        }
    }
}

/// QueueStatus is sent along with a 429 response.
///
/// `backoff` is the number of seconds the caller should wait before retrying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueueStatus {
    /// Queue ID, to be passed back when retrying.
    #[serde(default)]
    pub id: Option<String>,
    /// Number of seconds to wait.
    #[serde(default)]
    pub backoff: i64,
    /// Whether the queued request has started executing.
    #[serde(default)]
    pub started: bool,
}
