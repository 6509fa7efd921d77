//! Append-only sent-email log.
//!
//! One line per successful send under the per-user application directory.
//! The log is never read back or rotated by this tool.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::CONFIG_DIR;
use crate::errors::{SenderError, SenderResult};

/// Log directory name inside the application directory.
pub const LOG_DIR: &str = "logs";

/// Sent-email log file name.
pub const LOG_FILE: &str = "sent_emails.log";

/// Timestamp format of a log line, e.g. `2024-01-31 09:15:02`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only log of sent emails.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Opens the log at its default per-user location,
    /// `<home>/.gmail-hotkey-sender/logs/sent_emails.log`.
    pub fn open_default() -> SenderResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| SenderError::home_dir("unable to determine the user home directory"))?;
        Ok(Self {
            path: home.join(CONFIG_DIR).join(LOG_DIR).join(LOG_FILE),
        })
    }

    /// Opens the log at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this log appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry, creating parent directories as needed.
    ///
    /// Line format: `YYYY-MM-DD HH:MM:SS | To: <addr> | Subject: <text>`
    /// (UTC). Failures are surfaced as `LogWrite` errors; callers treat them
    /// as non-fatal.
    pub fn append(&self, to: &str, subject: &str) -> SenderResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                SenderError::log_write(format!(
                    "failed to create log directory {}",
                    parent.display()
                ))
                .with_cause(err)
            })?;
        }

        let timestamp = Utc::now().format(TIMESTAMP_FORMAT);
        let entry = format!("{timestamp} | To: {to} | Subject: {subject}\n");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| {
                SenderError::log_write(format!("failed to open {}", self.path.display()))
                    .with_cause(err)
            })?;
        file.write_all(entry.as_bytes()).map_err(|err| {
            SenderError::log_write(format!("failed to write {}", self.path.display()))
                .with_cause(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::tempdir;

    #[test]
    fn test_append_writes_one_line_per_entry_in_order() {
        let dir = tempdir().unwrap();
        let log = AuditLog::at(dir.path().join(LOG_FILE));

        log.append("a@x.com", "first").unwrap();
        log.append("a@x.com", "second").unwrap();

        let data = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("| To: a@x.com | Subject: first"));
        assert!(lines[1].ends_with("| To: a@x.com | Subject: second"));
    }

    #[test]
    fn test_entry_timestamp_matches_format() {
        let dir = tempdir().unwrap();
        let log = AuditLog::at(dir.path().join(LOG_FILE));

        log.append("a@x.com", "subject").unwrap();

        let data = fs::read_to_string(log.path()).unwrap();
        let (timestamp, rest) = data.split_once(" | ").unwrap();
        assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert!(rest.starts_with("To: "));
    }

    #[test]
    fn test_append_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let log = AuditLog::at(dir.path().join(LOG_DIR).join(LOG_FILE));

        log.append("a@x.com", "subject").unwrap();
        assert!(log.path().exists());
    }
}
