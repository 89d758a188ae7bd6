//! Per-cycle error taxonomy for the polling loop.
//!
//! Every failure that can happen between "issue the GET" and "have a
//! message worth sending" is a `WatchError`. The loop catches these at its
//! boundary, so their `Display` text doubles as the failure notification
//! body (and as the key for suppressing consecutive duplicates).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("endpoint {endpoint} is unavailable: {reason}")]
    Endpoint { endpoint: String, reason: String },

    /// The API answered, but not with 200.
    #[error("endpoint {endpoint} returned HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("API response is not a JSON object")]
    ResponseNotObject,

    #[error("API response is missing the \"homeworks\" key")]
    MissingHomeworks,

    #[error("\"homeworks\" in the API response is not a list")]
    HomeworksNotList,

    #[error("API response is missing the \"current_date\" key")]
    MissingCurrentDate,

    #[error("homework record is missing \"homework_name\"")]
    MissingHomeworkName,

    #[error("homework record is missing \"status\"")]
    MissingStatus,

    #[error("unexpected homework status in the API response: {0:?}")]
    UnknownStatus(String),
}
