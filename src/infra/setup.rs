use crate::{
    adapters::{
        email::resend::ResendEmailSender,
        http::app_state::AppState,
        persistence::{FileStorage, WaitlistStorage, WaitlistStore},
    },
    infra::{InfraError, config::AppConfig},
    use_cases::waitlist::{EmailSender, WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let storage = Arc::new(FileStorage::new(&config.waitlist_file));
    // Fail at startup rather than on the first signup.
    storage
        .ensure_location()
        .await
        .map_err(InfraError::StorageInit)?;
    info!(path = %storage.path().display(), "Waitlist file");

    let store = Arc::new(WaitlistStore::new(storage)) as Arc<dyn WaitlistRepo>;

    let email = match &config.resend_api_key {
        Some(api_key) => Some(Arc::new(ResendEmailSender::new(
            api_key.clone(),
            config.email_from.clone(),
        )) as Arc<dyn EmailSender>),
        None => {
            warn!("RESEND_API_KEY not set; welcome emails are disabled");
            None
        }
    };

    let waitlist_use_cases =
        WaitlistUseCases::new(store, email, config.app_origin.to_string());

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rechart_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); skipped if the log file cannot be created.
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
