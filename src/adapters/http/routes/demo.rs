//! Data for the landing page's interactive revenue chart.

use axum::{Json, Router, extract::Query, response::IntoResponse, routing::get};
use serde::Deserialize;

use crate::{adapters::http::app_state::AppState, application::demo_chart::filter_sales};

#[derive(Deserialize)]
struct SalesFilter {
    region: Option<String>,
    category: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/demo/sales", get(sales))
}

/// GET /api/demo/sales?region=North&category=Software
async fn sales(Query(filter): Query<SalesFilter>) -> impl IntoResponse {
    Json(filter_sales(
        filter.region.as_deref(),
        filter.category.as_deref(),
    ))
}
