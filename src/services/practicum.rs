// src/services/practicum.rs

//! Homework-status API client.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use crate::config::Settings;
use crate::error::FetchError;
use crate::models::HomeworkStatuses;

/// Endpoint serving homework review statuses.
const API_URL: &str = "https://praktikum.yandex.ru/api/user_api/homework_statuses/";

/// Source of homework status snapshots.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch submissions updated since `from_date` (Unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<HomeworkStatuses, FetchError>;
}

/// Client for the Practicum homework API.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a new client from the shared settings.
    pub fn new(settings: &Settings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(settings.http_timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: API_URL.to_string(),
            token: settings.practicum_token.clone(),
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<HomeworkStatuses, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(FetchError::from_request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await.map_err(FetchError::from_request)?;
        Ok(serde_json::from_str(&body)?)
    }
}
