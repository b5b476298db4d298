// src/main.rs

//! Homework review watcher.
//!
//! Polls the Practicum homework-status API on a fixed interval and reports
//! review verdicts to a Telegram chat. Takes no arguments; configuration
//! comes entirely from the environment.

use std::process;

use hwbot::config::{LogSettings, Settings};
use hwbot::logging;
use hwbot::poll::Poller;
use hwbot::services::{PracticumClient, TelegramNotifier};

#[tokio::main]
async fn main() {
    // Secrets may live in a local .env file during development.
    dotenvy::dotenv().ok();

    if let Err(err) = logging::init(&LogSettings::from_env()) {
        eprintln!("Failed to initialize logging: {err}");
        process::exit(1);
    }

    // Missing secrets are fatal; the chat channel may itself be unusable.
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Secrets could not be read, the bot is shutting down: {err}");
            process::exit(1);
        }
    };

    let source = PracticumClient::new(&settings);
    let messenger = TelegramNotifier::new(&settings);
    let poller = Poller::new(&settings, &source, &messenger);

    poller
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await;
}
