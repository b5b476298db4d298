// src/services/telegram.rs

//! Telegram Bot API notifier.

use async_trait::async_trait;
use serde_json::json;

use crate::config::Settings;
use crate::error::NotifyError;

/// Chat-message sink for status and error announcements.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver one plain-text message to the configured chat.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Notifier posting plain-text messages to a fixed chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Create a new notifier from the shared settings.
    pub fn new(settings: &Settings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(settings.http_timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            url: format!(
                "https://api.telegram.org/bot{}/sendMessage",
                settings.telegram_token
            ),
            chat_id: settings.chat_id.clone(),
        }
    }
}

#[async_trait]
impl Messenger for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status { status, body });
        }
        Ok(())
    }
}
