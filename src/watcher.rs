//! Per-cycle decision logic: what, if anything, should be sent this cycle.
//!
//! Kept free of networking so the duplicate-suppression rules can be unit
//! tested: the loop fetches, hands the result to `Watcher::observe`, and
//! sends whatever message comes back.

use serde_json::Value;
use tracing::{debug, error};

use crate::error::WatchError;
use crate::models::Homework;
use crate::response;

#[derive(Debug, Default)]
pub struct Watcher {
    /// Raw status string of the last record we notified about.
    last_status: Option<String>,
    /// Last failure notification text, for suppressing consecutive repeats.
    last_failure: Option<String>,
}

impl Watcher {
    /// Digest one cycle's fetch result and return the message to send, if any.
    ///
    /// A successful cycle clears the remembered failure, so only
    /// consecutive identical failures are suppressed.
    pub fn observe(&mut self, fetched: Result<Value, WatchError>) -> Option<String> {
        match self.digest(fetched) {
            Ok(message) => {
                self.last_failure = None;
                message
            }
            Err(err) => {
                error!("cycle failed: {err}");
                let message = format!("Program failure: {err}");
                if self.last_failure.as_deref() == Some(message.as_str()) {
                    debug!("suppressing repeated failure notification");
                    return None;
                }
                self.last_failure = Some(message.clone());
                Some(message)
            }
        }
    }

    fn digest(&mut self, fetched: Result<Value, WatchError>) -> Result<Option<String>, WatchError> {
        let payload = fetched?;
        let homeworks = response::check_response(&payload)?;

        let Some(first) = homeworks.first() else {
            debug!("no new homework statuses in response");
            return Ok(None);
        };

        let homework = Homework::from_value(first)?;
        if self.last_status.as_deref() == Some(homework.status.as_str()) {
            debug!("homework status unchanged, not notifying");
            return Ok(None);
        }

        // Recorded at decision time: delivery is best effort, and a failed
        // send must not trigger a duplicate on the next cycle.
        self.last_status = Some(homework.status.as_str().to_string());
        Ok(Some(homework.status_message()))
    }
}
