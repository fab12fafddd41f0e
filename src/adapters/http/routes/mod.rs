pub mod admin;
pub mod demo;
pub mod waitlist;

use axum::{Router, routing::get};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(waitlist::router())
        .merge(admin::router())
        .merge(demo::router())
}

async fn health() -> &'static str {
    "ok"
}
