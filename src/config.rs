//! Configuration for the homework status watcher.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    // Secrets
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,

    // Endpoints
    pub endpoint: String,
    pub telegram_api_base: String,

    // Polling
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// Tests go through this seam instead of mutating the process
    /// environment, which is not isolated between test threads.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut missing = Vec::new();
        let mut required = |key: &'static str| -> String {
            match lookup(key) {
                Some(v) if !v.trim().is_empty() => v,
                _ => {
                    missing.push(key);
                    String::new()
                }
            }
        };

        let practicum_token = required("PRACTICUM_TOKEN");
        let telegram_token = required("TELEGRAM_TOKEN");
        let telegram_chat_id = required("TELEGRAM_CHAT_ID");

        if !missing.is_empty() {
            return Err(anyhow!(
                "missing required environment variables: {}",
                missing.join(", ")
            ));
        }

        let endpoint =
            lookup("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let telegram_api_base = lookup("TELEGRAM_API_BASE")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string());

        let poll_interval_secs =
            parse_u64(&lookup, "POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)?;
        if poll_interval_secs == 0 {
            return Err(anyhow!("POLL_INTERVAL_SECS must be > 0"));
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            telegram_api_base,
            poll_interval: Duration::from_secs(poll_interval_secs),
        })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<u64> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid {key}: {raw} (expected integer seconds)")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("PRACTICUM_TOKEN", "practicum-secret"),
            ("TELEGRAM_TOKEN", "telegram-secret"),
            ("TELEGRAM_CHAT_ID", "12345"),
        ])
    }

    fn from_map(vars: &HashMap<&'static str, &'static str>) -> Result<Config> {
        Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_all_required_present() {
        let cfg = from_map(&base_vars()).unwrap();
        assert_eq!(cfg.practicum_token, "practicum-secret");
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.telegram_api_base, DEFAULT_TELEGRAM_API_BASE);
        assert_eq!(
            cfg.poll_interval,
            Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)
        );
    }

    #[test]
    fn test_each_missing_secret_is_named() {
        for key in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
            let mut vars = base_vars();
            vars.remove(key);
            let message = from_map(&vars).unwrap_err().to_string();
            assert!(message.contains(key), "{message} should name {key}");
            for other in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
                if other != key {
                    assert!(!message.contains(other), "{message} should not name {other}");
                }
            }
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut vars = base_vars();
        vars.insert("TELEGRAM_TOKEN", "  ");
        let message = from_map(&vars).unwrap_err().to_string();
        assert!(message.contains("TELEGRAM_TOKEN"));
    }

    #[test]
    fn test_all_missing_are_listed_together() {
        let message = from_map(&HashMap::new()).unwrap_err().to_string();
        assert!(message.contains("PRACTICUM_TOKEN"));
        assert!(message.contains("TELEGRAM_TOKEN"));
        assert!(message.contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_poll_interval_override() {
        let mut vars = base_vars();
        vars.insert("POLL_INTERVAL_SECS", "30");
        let cfg = from_map(&vars).unwrap();
        assert_eq!(cfg.poll_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_poll_interval_is_named() {
        let mut vars = base_vars();
        vars.insert("POLL_INTERVAL_SECS", "soon");
        let message = format!("{:#}", from_map(&vars).unwrap_err());
        assert!(message.contains("POLL_INTERVAL_SECS"));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut vars = base_vars();
        vars.insert("POLL_INTERVAL_SECS", "0");
        assert!(from_map(&vars).is_err());
    }

    #[test]
    fn test_endpoint_override() {
        let mut vars = base_vars();
        vars.insert("PRACTICUM_ENDPOINT", "http://localhost:8080/statuses/");
        let cfg = from_map(&vars).unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:8080/statuses/");
    }
}
