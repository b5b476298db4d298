// src/poll/mod.rs

//! Polling loop driver and its retry policy.

mod backoff;
mod driver;

pub use backoff::{Backoff, BackoffConfig};
pub use driver::Poller;
