// src/lib.rs

//! Homework review watcher library

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod poll;
pub mod services;
