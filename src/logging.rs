// src/logging.rs

//! Rotating-file logger behind the `log` facade.
//!
//! Every record is printed to the console and appended to a size-bounded
//! log file with numbered backups (`telegram_bot.log.1` is the newest).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::LogSettings;
use crate::error::{AppError, Result};

/// Initialize the global logger.
///
/// Fails if the log file cannot be opened or a logger is already installed.
pub fn init(settings: &LogSettings) -> Result<()> {
    let level = level_from_str(&settings.level);
    let file = RollingFile::open(&settings.path, settings.max_bytes, settings.backups)?;
    let logger = BotLogger {
        level,
        file: Mutex::new(file),
    };
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| AppError::config(format!("logger already installed: {e}")))?;
    log::set_max_level(level);
    Ok(())
}

fn level_from_str(s: &str) -> LevelFilter {
    match s.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Format a record with timestamp, level, target and source location.
fn format_record(record: &Record) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let location = match (record.file(), record.line()) {
        (Some(file), Some(line)) => format!("({file}:{line})"),
        _ => "(unknown)".to_string(),
    };
    format!(
        "{timestamp} - [{}] - {} - {location} - {}",
        record.level(),
        record.target(),
        record.args()
    )
}

/// Console-and-file logger.
struct BotLogger {
    level: LevelFilter,
    file: Mutex<RollingFile>,
}

impl Log for BotLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        if record.level() == Level::Info {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
        if let Ok(mut file) = self.file.lock() {
            // Console output already carries the record.
            let _ = file.write_line(&line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Size-bounded log file with numbered backups.
struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    fn open(path: &Path, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path: path.to_path_buf(),
            max_bytes,
            backups,
            file,
            written,
        })
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let bytes = line.len() as u64 + 1;
        if self.written > 0 && self.written + bytes > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.written += bytes;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    /// Shift `file.N` up by one, dropping the oldest, and start a fresh file.
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.backups == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }
        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))?;
        self.file = File::create(&self.path)?;
        self.written = 0;
        Ok(())
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(level_from_str("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_from_str("error"), LevelFilter::Error);
        assert_eq!(level_from_str("whatever"), LevelFilter::Info);
    }

    #[test]
    fn test_format_record_layout() {
        let line = format_record(
            &Record::builder()
                .level(Level::Info)
                .target("hwbot::poll")
                .file(Some("driver.rs"))
                .line(Some(42))
                .args(format_args!("cycle complete"))
                .build(),
        );
        assert!(line.ends_with("- [INFO] - hwbot::poll - (driver.rs:42) - cycle complete"));
    }

    #[test]
    fn test_rotation_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        let mut file = RollingFile::open(&path, 64, 2).unwrap();
        for _ in 0..20 {
            file.write_line("a line that is long enough to rotate").unwrap();
        }
        assert!(path.exists());
        assert!(dir.path().join("bot.log.1").exists());
        assert!(dir.path().join("bot.log.2").exists());
        assert!(!dir.path().join("bot.log.3").exists());
    }

    #[test]
    fn test_rotation_truncates_at_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        let mut file = RollingFile::open(&path, 64, 1).unwrap();
        for _ in 0..10 {
            file.write_line("0123456789012345678901234567890").unwrap();
        }
        file.flush().unwrap();
        assert!(fs::metadata(&path).unwrap().len() <= 64);
    }

    #[test]
    fn test_single_oversized_line_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        let mut file = RollingFile::open(&path, 8, 1).unwrap();
        file.write_line("much longer than eight bytes").unwrap();
        file.flush().unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 8);
    }

    #[test]
    fn test_reopen_counts_existing_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        {
            let mut file = RollingFile::open(&path, 1024, 1).unwrap();
            file.write_line("first run").unwrap();
        }
        let file = RollingFile::open(&path, 1024, 1).unwrap();
        assert_eq!(file.written, fs::metadata(&path).unwrap().len());
    }
}
