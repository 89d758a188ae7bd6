//! Telegram Bot API client for the one chat we notify.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramClient {
    pub fn new(api_base: String, token: String, chat_id: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_base,
            token,
            chat_id,
        }
    }

    /// Send plain text to the configured chat.
    ///
    /// Errors are returned for the caller to log; the loop treats delivery
    /// as best effort and never escalates a send failure. Error text must
    /// not include the request URL, which embeds the bot token.
    pub async fn send(&self, text: &str) -> Result<()> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.token
        );
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Telegram sendMessage request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Telegram API non-2xx: {status} body={body}");
        }
        Ok(())
    }
}
