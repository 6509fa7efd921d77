//! Command-line argument resolution.
//!
//! A deliberate hand-rolled scanner rather than a parser framework: the CLI
//! contract is a flat left-to-right token scan in which value flags consume
//! exactly one following token, unrecognized tokens are ignored, and a value
//! flag appearing as the final token is dropped. Resolution itself never
//! fails; recipient presence is checked separately by
//! [`SendRequest::validate`].

use std::path::PathBuf;

use crate::errors::{SenderError, SenderResult};

/// Usage text printed for `--help` and on validation failure.
pub const USAGE: &str = "\
Gmail Hotkey Sender

Usage: gmail-hotkey-sender [options]

Options:
  --to, -t <email>        Recipient email address(es) (required)
  --subject, -s <text>    Email subject
  --body, -b <text>       Email body
  --cc <emails>           CC recipient(s) (comma-separated)
  --bcc <emails>          BCC recipient(s) (comma-separated)
  --html <html>           HTML email body (optional)
  --draft                 Create draft instead of sending
  --config <path>         Path to configuration file
  --verbose, -v           Enable verbose logging
  --help, -h              Show this help message

Examples:
  gmail-hotkey-sender --to alice@example.com --subject \"Test\" --body \"Hello\"
  gmail-hotkey-sender -t bob@example.com -s \"Meeting\" -b \"Reminder\" --draft";

/// Structured send request built from the raw argument tokens.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendRequest {
    /// Recipient address. Required; validated by [`SendRequest::validate`].
    pub to: String,
    /// Subject text.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// CC recipients in argument order, split on literal commas.
    pub cc: Vec<String>,
    /// BCC recipients in argument order, split on literal commas.
    pub bcc: Vec<String>,
    /// Optional HTML body.
    pub html_body: Option<String>,
    /// Create a draft instead of sending.
    pub draft: bool,
    /// Configuration path override.
    pub config_path: Option<PathBuf>,
    /// Verbose output.
    pub verbose: bool,
}

impl SendRequest {
    /// Checks that a recipient is present.
    pub fn validate(&self) -> SenderResult<()> {
        if self.to.is_empty() {
            return Err(SenderError::missing_recipient("--to argument is required"));
        }
        Ok(())
    }
}

/// Outcome of scanning the argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A send/draft request to carry out.
    Request(SendRequest),
    /// `--help`/`-h` was present; print usage and exit successfully.
    Help,
}

/// Scans the argument tokens (program name excluded) into a [`Resolution`].
///
/// `--help`/`-h` anywhere short-circuits the scan. CC/BCC values are split on
/// commas with no whitespace trimming and no deduplication.
pub fn resolve(tokens: &[String]) -> Resolution {
    let mut request = SendRequest::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].as_str() {
            "--to" | "-t" => {
                if let Some(value) = tokens.get(i + 1) {
                    request.to = value.clone();
                    i += 1;
                }
            }
            "--subject" | "-s" => {
                if let Some(value) = tokens.get(i + 1) {
                    request.subject = value.clone();
                    i += 1;
                }
            }
            "--body" | "-b" => {
                if let Some(value) = tokens.get(i + 1) {
                    request.body = value.clone();
                    i += 1;
                }
            }
            "--cc" => {
                if let Some(value) = tokens.get(i + 1) {
                    request.cc = split_recipients(value);
                    i += 1;
                }
            }
            "--bcc" => {
                if let Some(value) = tokens.get(i + 1) {
                    request.bcc = split_recipients(value);
                    i += 1;
                }
            }
            "--html" => {
                if let Some(value) = tokens.get(i + 1) {
                    request.html_body = Some(value.clone());
                    i += 1;
                }
            }
            "--config" => {
                if let Some(value) = tokens.get(i + 1) {
                    request.config_path = Some(PathBuf::from(value));
                    i += 1;
                }
            }
            "--draft" => request.draft = true,
            "--verbose" | "-v" => request.verbose = true,
            "--help" | "-h" => return Resolution::Help,
            // Unrecognized tokens are ignored.
            _ => {}
        }
        i += 1;
    }

    Resolution::Request(request)
}

fn split_recipients(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}
