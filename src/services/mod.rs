// src/services/mod.rs

//! External service clients and the verdict interpreter.

mod practicum;
mod telegram;
mod verdict;

pub use practicum::{PracticumClient, StatusSource};
pub use telegram::{Messenger, TelegramNotifier};
pub use verdict::{NO_STATUS_CHANGE, interpret};
