// src/config.rs

//! Process configuration loaded from the environment.
//!
//! The three credentials are hard requirements; everything else is a
//! tunable with a default and never fails startup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::poll::BackoffConfig;

/// Normal poll interval between successful cycles.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 20 * 60;

/// Client-wide timeout for both API calls.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

const DEFAULT_LOG_LEVEL: &str = "debug";
const DEFAULT_LOG_FILE: &str = "telegram_bot.log";
const DEFAULT_LOG_MAX_BYTES: u64 = 5_000_000;
const DEFAULT_LOG_BACKUPS: usize = 5;

/// Settings assembled once at startup and passed by reference from there on.
#[derive(Debug, Clone)]
pub struct Settings {
    /// OAuth token for the homework-status API
    pub practicum_token: String,

    /// Telegram Bot API token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub chat_id: String,

    /// Sleep between successful poll cycles
    pub poll_interval: Duration,

    /// Timeout applied to each HTTP request
    pub http_timeout: Duration,

    /// Retry delay policy for failed cycles
    pub backoff: BackoffConfig,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// A missing or empty credential is a startup error; the caller is
    /// expected to log it and exit.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            practicum_token: required("PRAKTIKUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            chat_id: required("TELEGRAM_CHAT_ID")?,
            poll_interval: Duration::from_secs(secs_or(
                "POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )),
            http_timeout: Duration::from_secs(secs_or(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
            backoff: BackoffConfig::default(),
        })
    }
}

/// Where and how verbosely the bot logs.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Minimum level written out
    pub level: String,

    /// Rotating log file path
    pub path: PathBuf,

    /// Rotation threshold in bytes
    pub max_bytes: u64,

    /// Number of rotated backups kept around
    pub backups: usize,
}

impl LogSettings {
    /// Read log settings from the environment, with defaults throughout.
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            path: env::var("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE)),
            max_bytes: DEFAULT_LOG_MAX_BYTES,
            backups: DEFAULT_LOG_BACKUPS,
        }
    }
}

fn required(name: &str) -> Result<String> {
    non_empty(name, env::var(name).ok())
}

/// Reject absent and blank values alike.
fn non_empty(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(AppError::config(format!("{name} is set but empty"))),
        None => Err(AppError::config(format!("{name} is not set"))),
    }
}

fn secs_or(name: &str, default: u64) -> u64 {
    parse_secs(env::var(name).ok(), default)
}

fn parse_secs(value: Option<String>, default: u64) -> u64 {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
