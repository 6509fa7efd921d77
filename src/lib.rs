//! # Gmail Hotkey Sender
//!
//! A CLI for sending Gmail from a keyboard shortcut. The mail transport is a
//! placeholder pending the Gmail API client; the configuration, argument
//! resolution, and sent-email audit layers are fully functional:
//!
//! - JSON configuration under `~/.gmail-hotkey-sender/config.json` with
//!   wholesale defaulting and in-place healing of unparseable files
//! - Hand-rolled flag scanner producing an immutable request descriptor
//! - Append-only sent-email log under `~/.gmail-hotkey-sender/logs/`
//!
//! ## Quick Start
//!
//! ```no_run
//! use gmail_hotkey_sender::cli;
//!
//! #[tokio::main]
//! async fn main() {
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!     std::process::exit(cli::run(&args).await);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod args;
pub mod config;
pub mod errors;

// Collaborator seam
pub mod mail;

// Sent-email log
pub mod audit;

// Observability
pub mod observability;

// Orchestration
pub mod cli;

// Mocks for testing
pub mod mocks;

// Re-exports for convenience
pub use args::{Resolution, SendRequest};
pub use audit::AuditLog;
pub use config::{ConfigStore, SenderConfig};
pub use errors::{SenderError, SenderErrorKind, SenderResult};
pub use mail::{GmailClient, MailService};
