use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    app_error::{AppError, AppResult},
    application::{email_templates::waitlist_welcome_email, validators::is_valid_email},
    domain::entities::waitlist_entry::WaitlistEntry,
};

pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_ADDED: &str = "You've been added to our waitlist! We'll notify you when we launch.";
pub const MSG_ADDED_EMAIL_SENT: &str =
    "You've been added to our waitlist! Check your email for confirmation.";
pub const MSG_ADDED_EMAIL_PENDING: &str =
    "You've been added to our waitlist! (Email confirmation may take a moment)";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn add(&self, email: &str, ip: Option<&str>) -> AppResult<()>;
    async fn count(&self) -> AppResult<usize>;
    async fn list(&self) -> AppResult<Vec<WaitlistEntry>>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WelcomeEmail {
    Sent,
    Failed,
    Disabled,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscribeOutcome {
    pub success: bool,
    pub message: String,
    pub email: String,
    pub welcome_email: WelcomeEmail,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaitlistStats {
    pub total: usize,
    pub this_week: usize,
    pub latest_signup: Option<String>,
    /// Newest first.
    pub entries: Vec<WaitlistEntry>,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    email: Option<Arc<dyn EmailSender>>,
    app_origin: String,
}

impl WaitlistUseCases {
    /// `email: None` disables the welcome mail; signups still succeed.
    pub fn new(
        repo: Arc<dyn WaitlistRepo>,
        email: Option<Arc<dyn EmailSender>>,
        app_origin: String,
    ) -> Self {
        Self {
            repo,
            email,
            app_origin,
        }
    }

    #[instrument(skip(self))]
    pub async fn subscribe(&self, email: &str, ip: Option<&str>) -> AppResult<SubscribeOutcome> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput(MSG_INVALID_EMAIL.into()));
        }

        self.repo.add(email, ip).await?;

        let Some(sender) = &self.email else {
            info!(email, "New waitlist signup (email sending disabled - no API key)");
            return Ok(outcome(email, MSG_ADDED, WelcomeEmail::Disabled));
        };

        let (subject, html) = waitlist_welcome_email(&self.app_origin);
        match sender.send(email, &subject, &html).await {
            Ok(()) => {
                info!(email, "Welcome email sent");
                Ok(outcome(email, MSG_ADDED_EMAIL_SENT, WelcomeEmail::Sent))
            }
            Err(err) => {
                warn!(error = %err, email, "Sending welcome email failed; signup kept");
                Ok(outcome(email, MSG_ADDED_EMAIL_PENDING, WelcomeEmail::Failed))
            }
        }
    }

    pub async fn count(&self) -> AppResult<usize> {
        self.repo.count().await
    }

    pub async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.repo.list().await
    }

    pub async fn stats(&self) -> AppResult<WaitlistStats> {
        self.stats_at(Utc::now()).await
    }

    #[instrument(skip(self))]
    pub async fn stats_at(&self, now: DateTime<Utc>) -> AppResult<WaitlistStats> {
        let mut entries = self.repo.list().await?;
        let week_ago = now - Duration::days(7);

        let this_week = entries
            .iter()
            .filter(|e| e.joined_at().is_some_and(|at| at > week_ago))
            .count();
        let latest_signup = entries.last().map(|e| e.timestamp.clone());
        entries.reverse();

        Ok(WaitlistStats {
            total: entries.len(),
            this_week,
            latest_signup,
            entries,
        })
    }

    /// `email,timestamp,ip` rows in signup order; a missing ip is an empty field.
    pub async fn export_csv(&self) -> AppResult<String> {
        let entries = self.repo.list().await?;
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(["email", "timestamp", "ip"])
            .map_err(|e| AppError::Internal(format!("CSV export failed: {e}")))?;
        for entry in &entries {
            writer
                .write_record([
                    entry.email.as_str(),
                    entry.timestamp.as_str(),
                    entry.ip.as_deref().unwrap_or_default(),
                ])
                .map_err(|e| AppError::Internal(format!("CSV export failed: {e}")))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("CSV export failed: {e}")))?;
        String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV export failed: {e}")))
    }
}

fn outcome(email: &str, message: &str, welcome_email: WelcomeEmail) -> SubscribeOutcome {
    SubscribeOutcome {
        success: true,
        message: message.to_string(),
        email: email.to_string(),
        welcome_email,
    }
}
