//! Mail service seam.
//!
//! [`MailService`] is the boundary between the CLI core and the Gmail API
//! client. The shipped [`GmailClient`] is a placeholder: it prints what it
//! would do and succeeds, so the surrounding resolve/config/audit machinery
//! can be exercised end to end before the transport exists.

use async_trait::async_trait;

use crate::errors::{SenderError, SenderResult};

/// Maximum number of characters of the body echoed by the placeholder.
const BODY_PREVIEW_CHARS: usize = 100;

/// Operations the CLI core requires from a mail backend.
#[async_trait]
pub trait MailService {
    /// Establishes API credentials for subsequent calls.
    async fn authenticate(&mut self) -> SenderResult<()>;

    /// Sends an email.
    async fn send_email(
        &mut self,
        to: &str,
        subject: &str,
        body: &str,
        cc: &[String],
        bcc: &[String],
        html_body: Option<&str>,
    ) -> SenderResult<()>;

    /// Creates a draft instead of sending.
    async fn create_draft(&mut self, to: &str, subject: &str, body: &str) -> SenderResult<()>;
}

/// Placeholder Gmail client.
///
/// Prints the would-be operation instead of performing it.
// TODO: replace with a real client: run the OAuth2 installed-app flow
// against credentials_file/token_file from the config, then POST
// users.messages.send / users.drafts.create.
#[derive(Debug, Default)]
pub struct GmailClient;

impl GmailClient {
    /// Creates a new placeholder client.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailService for GmailClient {
    async fn authenticate(&mut self) -> SenderResult<()> {
        println!("Gmail API authentication not yet implemented");
        Err(SenderError::auth(
            "OAuth2 flow is not configured; see the credentials_file setting",
        ))
    }

    async fn send_email(
        &mut self,
        to: &str,
        subject: &str,
        body: &str,
        cc: &[String],
        bcc: &[String],
        html_body: Option<&str>,
    ) -> SenderResult<()> {
        println!("Would send email to: {to}");
        println!("Subject: {subject}");
        println!("Body: {}", preview(body));
        if !cc.is_empty() {
            println!("Cc: {}", cc.join(", "));
        }
        if !bcc.is_empty() {
            println!("Bcc: {}", bcc.join(", "));
        }
        if html_body.is_some() {
            println!("(HTML body attached)");
        }

        tracing::debug!(to, subject, "placeholder send");
        Ok(())
    }

    async fn create_draft(&mut self, to: &str, _subject: &str, _body: &str) -> SenderResult<()> {
        println!("Would create draft to: {to}");
        tracing::debug!(to, "placeholder draft");
        Ok(())
    }
}

/// Truncates the body to [`BODY_PREVIEW_CHARS`] characters for echoing.
fn preview(body: &str) -> String {
    if body.chars().count() > BODY_PREVIEW_CHARS {
        let cut: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SenderErrorKind;

    #[test]
    fn test_authenticate_fails_until_configured() {
        let err = tokio_test::block_on(GmailClient::new().authenticate()).unwrap_err();
        assert_eq!(err.kind(), SenderErrorKind::AuthNotConfigured);
    }

    #[test]
    fn test_placeholder_send_succeeds() {
        let result = tokio_test::block_on(GmailClient::new().send_email(
            "a@x.com",
            "hi",
            "body",
            &[],
            &[],
            None,
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn test_placeholder_draft_succeeds() {
        let result =
            tokio_test::block_on(GmailClient::new().create_draft("a@x.com", "hi", "body"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_preview_truncates_long_bodies() {
        let long = "x".repeat(250);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), BODY_PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_preview_is_char_safe() {
        let body = "é".repeat(150);
        let shown = preview(&body);
        assert!(shown.starts_with('é'));
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_preview_leaves_short_bodies_alone() {
        assert_eq!(preview("hello"), "hello");
    }
}
