//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by an in-memory waitlist store.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::http::HeaderValue;
use url::Url;

use crate::{
    adapters::{http::app_state::AppState, persistence::WaitlistStore},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::AppConfig,
    test_utils::{InMemoryEmailSender, seeded_storage},
    use_cases::waitlist::{EmailSender, WaitlistUseCases},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, email_sender) = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "taken@example.com".to_string()))
///     .build_with_email_mock();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    email_sender: Option<Arc<dyn EmailSender>>,
    trust_proxy: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            email_sender: None,
            trust_proxy: false,
        }
    }

    /// Pre-populate the waitlist.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Set a custom email sender. Without one, welcome emails are disabled.
    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Honor `X-Forwarded-For` / `X-Real-IP` as a reverse proxy deployment would.
    pub fn with_trust_proxy(mut self, trust_proxy: bool) -> Self {
        self.trust_proxy = trust_proxy;
        self
    }

    pub fn build(self) -> AppState {
        let config = AppConfig {
            trust_proxy: self.trust_proxy,
            ..test_config()
        };
        let store = WaitlistStore::new(Arc::new(seeded_storage(&self.entries)));
        let waitlist_use_cases = WaitlistUseCases::new(
            Arc::new(store),
            self.email_sender,
            config.app_origin.to_string(),
        );

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
        }
    }

    /// Build with a capturing email sender and hand it back for assertions.
    pub fn build_with_email_mock(self) -> (AppState, Arc<InMemoryEmailSender>) {
        let sender = Arc::new(InMemoryEmailSender::new());
        let state = self.with_email_sender(sender.clone()).build();
        (state, sender)
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        waitlist_file: PathBuf::from("unused/waitlist.json"),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        trust_proxy: false,
        resend_api_key: None,
        email_from: "Rechart <welcome@rechart.test>".to_string(),
        app_origin: Url::parse("https://rechart.test").expect("static url"),
    }
}
