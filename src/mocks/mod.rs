//! Mock implementations and fixtures for testing.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::args::SendRequest;
use crate::errors::{SenderError, SenderResult};
use crate::mail::MailService;

/// A call recorded by [`MockMailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailCall {
    /// `authenticate` was invoked.
    Authenticate,
    /// `send_email` was invoked.
    Send {
        /// Recipient.
        to: String,
        /// Subject.
        subject: String,
        /// Body.
        body: String,
        /// CC list.
        cc: Vec<String>,
        /// BCC list.
        bcc: Vec<String>,
        /// HTML body, when given.
        html_body: Option<String>,
    },
    /// `create_draft` was invoked.
    Draft {
        /// Recipient.
        to: String,
        /// Subject.
        subject: String,
    },
}

/// Mock mail service recording calls, with programmable failure.
#[derive(Debug, Default)]
pub struct MockMailer {
    calls: Mutex<Vec<MailCall>>,
    fail_next: Mutex<Option<SenderError>>,
}

impl MockMailer {
    /// Creates a new mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next operation fail with the given error.
    pub fn fail_next_with(&self, error: SenderError) -> &Self {
        *self.fail_next.lock().unwrap() = Some(error);
        self
    }

    /// Returns the recorded calls in order.
    pub fn recorded_calls(&self) -> Vec<MailCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check_failure(&self) -> SenderResult<()> {
        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }
        Ok(())
    }
}

#[async_trait]
impl MailService for MockMailer {
    async fn authenticate(&mut self) -> SenderResult<()> {
        self.check_failure()?;
        self.calls.lock().unwrap().push(MailCall::Authenticate);
        Ok(())
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
        self.check_failure()?;
        self.calls.lock().unwrap().push(MailCall::Send {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            cc: cc.to_vec(),
            bcc: bcc.to_vec(),
            html_body: html_body.map(str::to_string),
        });
        Ok(())
    }

    async fn create_draft(&mut self, to: &str, subject: &str, _body: &str) -> SenderResult<()> {
        self.check_failure()?;
        self.calls.lock().unwrap().push(MailCall::Draft {
            to: to.to_string(),
            subject: subject.to_string(),
        });
        Ok(())
    }
}

/// Creates a minimal valid request.
pub fn test_request() -> SendRequest {
    SendRequest {
        to: "recipient@example.com".to_string(),
        subject: "Test Subject".to_string(),
        body: "Test body".to_string(),
        ..SendRequest::default()
    }
}

/// Creates a request with CC/BCC lists and an HTML body.
pub fn test_request_full() -> SendRequest {
    SendRequest {
        cc: vec!["cc@example.com".to_string()],
        bcc: vec!["bcc@example.com".to_string()],
        html_body: Some("<p>Test</p>".to_string()),
        ..test_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls_in_order() {
        let mut mailer = MockMailer::new();

        mailer
            .send_email("a@x.com", "s", "b", &[], &[], None)
            .await
            .unwrap();
        mailer.create_draft("b@x.com", "d", "b").await.unwrap();

        let calls = mailer.recorded_calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(&calls[0], MailCall::Send { to, .. } if to == "a@x.com"));
        assert!(matches!(&calls[1], MailCall::Draft { to, .. } if to == "b@x.com"));
    }

    #[tokio::test]
    async fn test_mock_programmed_failure_fires_once() {
        let mut mailer = MockMailer::new();
        mailer.fail_next_with(SenderError::send("programmed failure"));

        assert!(mailer
            .send_email("a@x.com", "s", "b", &[], &[], None)
            .await
            .is_err());
        assert!(mailer
            .send_email("a@x.com", "s", "b", &[], &[], None)
            .await
            .is_ok());
        assert_eq!(mailer.recorded_calls().len(), 1);
    }

    #[test]
    fn test_fixtures_validate() {
        assert!(test_request().validate().is_ok());
        assert!(test_request_full().validate().is_ok());
        assert_eq!(test_request_full().cc.len(), 1);
    }
}
