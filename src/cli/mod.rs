//! CLI orchestration.
//!
//! One resolve, validate, load-config, send-or-draft, audit, exit sequence
//! per process. All policy about exit codes and which failures are
//! fatal lives here; the modules underneath only return errors.

use crate::args::{self, Resolution, SendRequest, USAGE};
use crate::audit::AuditLog;
use crate::config::{ConfigStore, SenderConfig};
use crate::errors::SenderResult;
use crate::mail::{GmailClient, MailService};
use crate::observability;

/// Runs the CLI against the given argument tokens (program name excluded).
///
/// Returns the process exit code: 0 on success (including `--help`), 1 on a
/// missing recipient, an unresolvable home directory, or a send/draft
/// failure.
pub async fn run(args: &[String]) -> i32 {
    let request = match args::resolve(args) {
        Resolution::Help => {
            println!("{USAGE}");
            return 0;
        }
        Resolution::Request(request) => request,
    };

    observability::init(request.verbose);
    if request.verbose {
        println!("Verbose mode enabled");
    }

    if let Err(err) = request.validate() {
        eprintln!("Error: {err}");
        println!("{USAGE}");
        return 1;
    }

    // The only fatal startup error: without a home directory there is no
    // config location to fall back to.
    let store = match ConfigStore::open(request.config_path.clone()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error: {err}");
            return 1;
        }
    };
    let config = store.load();
    tracing::debug!(path = %store.path().display(), "configuration loaded");

    // An unavailable log location is not fatal; the send proceeds unlogged.
    let audit = match AuditLog::open_default() {
        Ok(log) => Some(log),
        Err(err) => {
            tracing::warn!(error = %err, "sent-email log location unavailable");
            None
        }
    };

    let mut mailer = GmailClient::new();
    match dispatch(&request, &config, &mut mailer, audit.as_ref()).await {
        Ok(()) => {
            println!("Operation completed successfully");
            0
        }
        Err(err) => {
            eprintln!("Operation failed: {err}");
            1
        }
    }
}

/// Carries out the requested operation and records successful sends.
///
/// Drafts are never audited; audit failures are logged and swallowed so the
/// operation outcome is unaffected.
async fn dispatch<M: MailService>(
    request: &SendRequest,
    config: &SenderConfig,
    mailer: &mut M,
    audit: Option<&AuditLog>,
) -> SenderResult<()> {
    if request.draft {
        return mailer
            .create_draft(&request.to, &request.subject, &request.body)
            .await;
    }

    mailer
        .send_email(
            &request.to,
            &request.subject,
            &request.body,
            &request.cc,
            &request.bcc,
            request.html_body.as_deref(),
        )
        .await?;

    if config.log_sent_emails {
        match audit {
            Some(log) => {
                if let Err(err) = log.append(&request.to, &request.subject) {
                    tracing::warn!(error = %err, "failed to record sent email");
                }
            }
            None => tracing::warn!("sent-email log unavailable, entry skipped"),
        }
    }

    Ok(())
}
