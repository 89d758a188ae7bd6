mod config;
mod error;
mod models;
mod practicum;
mod response;
mod telegram;
mod watcher;

use anyhow::{Context, Result};
use chrono::Utc;
use config::Config;
use dotenv::dotenv;
use practicum::PracticumClient;
use std::env;
use telegram::TelegramClient;
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use watcher::Watcher;

/// Initialize tracing with stdout and file output.
///
/// The file layer appends to `<log_dir>/homework_watcher.<date>.log` with
/// daily rotation; the stdout layer mirrors the same records.
fn init_tracing(log_dir: &str) -> Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {log_dir}"))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("homework_watcher")
        .filename_suffix("log")
        .build(log_dir)
        .context("Failed to create log file appender")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard must outlive the process or buffered records are dropped.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("homework_watcher=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    init_tracing(&log_dir)?;

    info!("Starting homework status watcher...");

    // Missing configuration is fatal; no notification is attempted since
    // the bot credentials themselves may be what is missing.
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("configuration error: {e:#}");
            return Err(e);
        }
    };
    info!(
        "Config: endpoint={} poll_interval={}s",
        cfg.endpoint,
        cfg.poll_interval.as_secs()
    );

    let practicum = PracticumClient::new(cfg.endpoint.clone(), cfg.practicum_token.clone());
    let telegram = TelegramClient::new(
        cfg.telegram_api_base.clone(),
        cfg.telegram_token.clone(),
        cfg.telegram_chat_id.clone(),
    );

    // Only statuses updated after startup are reported; never advanced.
    let from_date = Utc::now().timestamp();
    let mut watcher = Watcher::default();

    loop {
        let fetched = practicum.homework_statuses(from_date).await;
        if let Some(message) = watcher.observe(fetched) {
            match telegram.send(&message).await {
                Ok(()) => info!("Sent Telegram message: {message}"),
                Err(e) => error!("Failed to deliver Telegram message: {e:#}"),
            }
        }
        tokio::time::sleep(cfg.poll_interval).await;
    }
}
