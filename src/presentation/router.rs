// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    case_study_content, case_study_page, chart_dataset, health_check, stream_case_study,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    // Pages are compressed in html_response, so no CompressionLayer here.
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(case_study_page))
        .route("/projects/data-lakehouse", get(case_study_page))
        .route("/projects/data-lakehouse/stream", get(stream_case_study))
        .route("/api/projects/data-lakehouse", get(case_study_content))
        .route("/api/projects/data-lakehouse/charts/:id", get(chart_dataset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
