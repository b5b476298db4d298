// src/poll/driver.rs

//! The polling loop: fetch, interpret, compare, notify, sleep.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::Settings;
use crate::models::HomeworkStatuses;
use crate::services::{Messenger, NO_STATUS_CHANGE, StatusSource, interpret};

use super::backoff::Backoff;

/// Drives the poll cycle and owns its state.
///
/// The loop state is two values: the watermark timestamp sent with each
/// fetch and the verdict text announced last. Everything else is stateless
/// per cycle.
pub struct Poller<'a> {
    source: &'a dyn StatusSource,
    messenger: &'a dyn Messenger,
    poll_interval: Duration,
    backoff: Backoff,
    watermark: i64,
    last_announced: String,
}

impl<'a> Poller<'a> {
    /// Create a poller whose watermark starts at the current time.
    pub fn new(
        settings: &Settings,
        source: &'a dyn StatusSource,
        messenger: &'a dyn Messenger,
    ) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or(0);
        Self::with_watermark(settings, source, messenger, now)
    }

    /// Create a poller starting from an explicit watermark.
    pub fn with_watermark(
        settings: &Settings,
        source: &'a dyn StatusSource,
        messenger: &'a dyn Messenger,
        watermark: i64,
    ) -> Self {
        Self {
            source,
            messenger,
            poll_interval: settings.poll_interval,
            backoff: Backoff::new(settings.backoff.clone()),
            watermark,
            last_announced: NO_STATUS_CHANGE.to_string(),
        }
    }

    /// Run cycles until the shutdown future resolves.
    ///
    /// Each cycle computes its own wake-up delay; the suspension is the
    /// only cancellation point.
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);
        log::debug!("Bot is starting up");

        loop {
            let delay = self.tick().await;
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = &mut shutdown => {
                    log::info!("Shutdown signal received, stopping the poller");
                    break;
                }
            }
        }
    }

    /// Run one poll cycle and return how long to sleep before the next.
    pub async fn tick(&mut self) -> Duration {
        match self.source.fetch(self.watermark).await {
            Ok(response) => self.handle_response(response).await,
            Err(err) => {
                self.report_failure(&err.to_string()).await;
                self.backoff.next_delay()
            }
        }
    }

    async fn handle_response(&mut self, response: HomeworkStatuses) -> Duration {
        if let Some(stamp) = response.current_date {
            self.advance_watermark(stamp);
        }

        let Some(homeworks) = response.homeworks.as_deref() else {
            // Missing list key: no update this cycle, no backoff escalation.
            log::warn!("Response carried no homeworks list, skipping this cycle");
            self.backoff.reset();
            return self.poll_interval;
        };

        let verdict = interpret(homeworks.first());
        if verdict != self.last_announced {
            log::info!("Sending status update to the chat");
            match self.messenger.send(&verdict).await {
                Ok(()) => self.last_announced = verdict,
                Err(err) => {
                    self.report_failure(&err.to_string()).await;
                    return self.backoff.next_delay();
                }
            }
        }

        self.backoff.reset();
        self.poll_interval
    }

    /// The watermark only ever moves forward.
    fn advance_watermark(&mut self, stamp: i64) {
        if stamp > self.watermark {
            self.watermark = stamp;
        } else if stamp < self.watermark {
            log::warn!(
                "Server reported an older timestamp ({} < {}), keeping the current watermark",
                stamp,
                self.watermark
            );
        }
    }

    /// Log a failure and mirror it to the chat on a best-effort basis.
    async fn report_failure(&self, description: &str) {
        log::error!("{description}");
        log::info!("Sending error report to the chat");
        let message = format!("В работе бота произошла ошибка: {description}");
        if let Err(err) = self.messenger.send(&message).await {
            // The error channel itself is down; the log is all that is left.
            log::error!("Could not deliver the error report: {err}");
        }
    }
}
