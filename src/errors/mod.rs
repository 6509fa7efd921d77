//! Error types for the sender CLI.
//!
//! Provides a single error type with kind-based classification, so callers
//! can decide between healing, swallowing, and exiting without matching on
//! message strings.

use std::fmt;
use thiserror::Error;

/// Result type for sender operations.
pub type SenderResult<T> = Result<T, SenderError>;

/// Error kinds categorizing the failure modes of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SenderErrorKind {
    /// The user home directory could not be determined.
    HomeDirUnavailable,
    /// The configuration file could not be read or parsed.
    ConfigRead,
    /// The configuration file could not be written.
    ConfigWrite,
    /// The sent-email log could not be written.
    LogWrite,
    /// No recipient was supplied.
    MissingRecipient,
    /// Gmail API authentication is not configured.
    AuthNotConfigured,
    /// Sending the email failed.
    SendFailed,
    /// Creating the draft failed.
    DraftFailed,
}

impl SenderErrorKind {
    /// Returns true if this error leaves the process without a usable
    /// environment and must abort startup.
    ///
    /// Only home-directory resolution qualifies: without it there is no
    /// config or log location to fall back to. Everything else is either
    /// healed, swallowed, or reported as an ordinary operation failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SenderErrorKind::HomeDirUnavailable)
    }
}

impl fmt::Display for SenderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderErrorKind::HomeDirUnavailable => write!(f, "Home directory unavailable"),
            SenderErrorKind::ConfigRead => write!(f, "Configuration read failed"),
            SenderErrorKind::ConfigWrite => write!(f, "Configuration write failed"),
            SenderErrorKind::LogWrite => write!(f, "Sent-email log write failed"),
            SenderErrorKind::MissingRecipient => write!(f, "Missing recipient"),
            SenderErrorKind::AuthNotConfigured => write!(f, "Authentication not configured"),
            SenderErrorKind::SendFailed => write!(f, "Send failed"),
            SenderErrorKind::DraftFailed => write!(f, "Draft creation failed"),
        }
    }
}

/// Sender error with kind, message, and optional underlying cause.
#[derive(Error, Debug)]
pub struct SenderError {
    kind: SenderErrorKind,
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SenderError {
    /// Creates a new error.
    pub fn new(kind: SenderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches the underlying cause.
    pub fn with_cause<E: std::error::Error + Send + Sync + 'static>(mut self, cause: E) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SenderErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error must abort startup.
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }

    // Convenience constructors

    /// Creates a home-directory resolution error.
    pub fn home_dir(message: impl Into<String>) -> Self {
        Self::new(SenderErrorKind::HomeDirUnavailable, message)
    }

    /// Creates a configuration read error.
    pub fn config_read(message: impl Into<String>) -> Self {
        Self::new(SenderErrorKind::ConfigRead, message)
    }

    /// Creates a configuration write error.
    pub fn config_write(message: impl Into<String>) -> Self {
        Self::new(SenderErrorKind::ConfigWrite, message)
    }

    /// Creates a sent-email log write error.
    pub fn log_write(message: impl Into<String>) -> Self {
        Self::new(SenderErrorKind::LogWrite, message)
    }

    /// Creates a missing-recipient validation error.
    pub fn missing_recipient(message: impl Into<String>) -> Self {
        Self::new(SenderErrorKind::MissingRecipient, message)
    }

    /// Creates an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(SenderErrorKind::AuthNotConfigured, message)
    }

    /// Creates a send error.
    pub fn send(message: impl Into<String>) -> Self {
        Self::new(SenderErrorKind::SendFailed, message)
    }

    /// Creates a draft error.
    pub fn draft(message: impl Into<String>) -> Self {
        Self::new(SenderErrorKind::DraftFailed, message)
    }
}

impl fmt::Display for SenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
