//! Homework review statuses and the records that carry them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::error::WatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Canned human-readable verdict for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => {
                "The review is finished: the reviewer liked everything. Hooray!"
            }
            HomeworkStatus::Reviewing => "The work was picked up for review.",
            HomeworkStatus::Rejected => "The review is finished: the reviewer has remarks.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            _ => Err(()),
        }
    }
}

/// One submission's review state as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homework {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// Extract a homework record from one element of the `homeworks` array.
    ///
    /// Field checks are done by hand rather than through a derive so that
    /// each violation gets its own error naming the offending key or value.
    pub fn from_value(value: &Value) -> Result<Self, WatchError> {
        let name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(WatchError::MissingHomeworkName)?;
        let raw_status = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or(WatchError::MissingStatus)?;
        let status = raw_status
            .parse::<HomeworkStatus>()
            .map_err(|_| WatchError::UnknownStatus(raw_status.to_string()))?;
        Ok(Homework {
            homework_name: name.to_string(),
            status,
        })
    }

    /// Notification text for this record's current status.
    pub fn status_message(&self) -> String {
        format!(
            "Homework \"{}\" changed status. {}",
            self.homework_name,
            self.status.verdict()
        )
    }
}
