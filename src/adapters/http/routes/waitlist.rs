//! Public signup routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_state::AppState, middleware::ClientIp},
    app_error::AppResult,
};

#[derive(Deserialize)]
struct SubscribePayload {
    email: String,
}

#[derive(Serialize)]
struct CountResponse {
    count: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", post(subscribe))
        .route("/waitlist/count", get(count))
}

/// POST /api/waitlist
/// Adds the email to the waitlist and sends the welcome email when configured.
async fn subscribe(
    State(app_state): State<AppState>,
    ClientIp(ip): ClientIp,
    Json(payload): Json<SubscribePayload>,
) -> AppResult<impl IntoResponse> {
    let outcome = app_state
        .waitlist_use_cases
        .subscribe(&payload.email, ip.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// GET /api/waitlist/count
async fn count(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = app_state.waitlist_use_cases.count().await?;
    Ok(Json(CountResponse { count }))
}
