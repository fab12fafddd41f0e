//! Email sender mocks.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::waitlist::EmailSender,
};

#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Records every message instead of sending it.
#[derive(Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<CapturedEmail>>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured_emails(&self) -> Vec<CapturedEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        self.sent.lock().unwrap().push(CapturedEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// Rejects every message, like an email API returning an error status.
#[derive(Default)]
pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _to: &str, _subject: &str, _html: &str) -> AppResult<()> {
        Err(AppError::Internal("Email API error: 422 Unprocessable Entity".into()))
    }
}
