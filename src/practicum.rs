//! Practicum homework statuses API client.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::error::WatchError;

#[derive(Debug, Clone)]
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("homework-watcher/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            endpoint,
            token,
        }
    }

    /// Fetch homework statuses updated since `from_date` (unix seconds).
    ///
    /// Returns the raw JSON payload; shape validation is the caller's job.
    /// Anything other than a clean 200 is an error naming the endpoint.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, WatchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| WatchError::Endpoint {
                endpoint: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(WatchError::HttpStatus {
                endpoint: self.endpoint.clone(),
                status,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WatchError::Endpoint {
                endpoint: self.endpoint.clone(),
                reason: e.to_string(),
            })
    }
}
