use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One waitlist signup as it is persisted.
///
/// `timestamp` is kept as the stored RFC 3339 text so that a load/save cycle
/// reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl WaitlistEntry {
    /// Create an entry stamped with the current time.
    pub fn new(email: &str, ip: Option<String>) -> Self {
        Self::created_at(email, ip, Utc::now())
    }

    pub fn created_at(email: &str, ip: Option<String>, at: DateTime<Utc>) -> Self {
        Self {
            email: normalize_email(email),
            timestamp: format_timestamp(at),
            ip,
        }
    }

    /// Case-insensitive comparison against a candidate address.
    pub fn matches_email(&self, email: &str) -> bool {
        normalize_email(&self.email) == normalize_email(email)
    }

    /// Parsed creation time, `None` if the stored text is not RFC 3339.
    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// `2024-05-01T12:34:56.789Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
