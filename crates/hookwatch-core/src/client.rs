//! HTTP client for the events endpoint.
//!
//! One unauthenticated GET per poll. The caller decides what to do with
//! failures; this module only classifies them.

use std::fmt;

use url::Url;

use crate::events::EventRecord;

// Re-exported so callers can match Protocol statuses without a reqwest dep.
pub use reqwest::StatusCode;

/// Classification of a failed poll.
///
/// Every variant is handled the same way at the poll boundary (logged, the
/// displayed list untouched); the split exists so logs and tests can tell
/// connection, status and body problems apart.
#[derive(Debug)]
pub enum PollError {
    /// The request could not be sent or no response arrived.
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Protocol { status: StatusCode },
    /// The body was not a JSON array of `{event, payload}` objects.
    Decode(reqwest::Error),
}

impl fmt::Display for PollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollError::Transport(err) => write!(f, "transport failure: {err}"),
            PollError::Protocol { status } => write!(f, "protocol failure: status {status}"),
            PollError::Decode(err) => write!(f, "malformed response: {err}"),
        }
    }
}

impl std::error::Error for PollError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PollError::Transport(err) | PollError::Decode(err) => Some(err),
            PollError::Protocol { .. } => None,
        }
    }
}

/// Client bound to one events endpoint.
#[derive(Debug)]
pub struct EventsClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl EventsClient {
    /// Creates a client polling the given endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// The endpoint this client polls.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the complete current event list.
    ///
    /// Success means an HTTP 2xx response whose body decodes as a JSON array
    /// of records. Anything else maps onto the `PollError` taxonomy.
    pub async fn fetch_events(&self) -> Result<Vec<EventRecord>, PollError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(PollError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Protocol { status });
        }

        response
            .json::<Vec<EventRecord>>()
            .await
            .map_err(PollError::Decode)
    }
}
