//! Admin view of the waitlist. Unauthenticated; expose only on a private network.

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/waitlist", get(stats))
        .route("/admin/waitlist.csv", get(export_csv))
}

/// GET /api/admin/waitlist
/// Totals plus all entries, newest first.
async fn stats(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = app_state.waitlist_use_cases.stats().await?;
    Ok(Json(stats))
}

/// GET /api/admin/waitlist.csv
async fn export_csv(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let csv = app_state.waitlist_use_cases.export_csv().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"waitlist.csv\"",
            ),
        ],
        csv,
    ))
}
