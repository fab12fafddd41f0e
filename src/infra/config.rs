use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// JSON file holding the waitlist. Its parent directory is created on demand.
    pub waitlist_file: PathBuf,
    pub cors_origin: HeaderValue,
    /// Whether to trust X-Forwarded-For headers. Set to true when behind a reverse proxy (Caddy, nginx).
    /// SECURITY: Only enable this when the API is not directly exposed to the internet.
    pub trust_proxy: bool,
    /// Resend API key. When unset, signups are stored but no welcome email is sent.
    pub resend_api_key: Option<SecretString>,
    pub email_from: String,
    pub app_origin: Url,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let waitlist_file: String =
            get_env_default("WAITLIST_FILE", "data/waitlist.json".to_string());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        // Default to false for security - must explicitly enable when behind a trusted proxy
        let trust_proxy: bool = get_env_default("TRUST_PROXY", false);
        let resend_api_key: Option<SecretString> = std::env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|key| SecretString::new(key.into()));
        let email_from: String =
            get_env_default("EMAIL_FROM", "Rechart <welcome@rechart.app>".to_string());
        let app_origin: Url = get_env_default("APP_ORIGIN", "https://rechart.app".to_string())
            .parse()
            .expect("APP_ORIGIN must be a valid URL");

        Self {
            bind_addr,
            waitlist_file: PathBuf::from(waitlist_file),
            cors_origin,
            trust_proxy,
            resend_api_key,
            email_from,
            app_origin,
        }
    }
}
