// HTTP request handlers
use crate::application::case_study_service::DOCUMENT_CLOSE;
use crate::infrastructure::chunked_html::{document_chunks, stream_chunks};
use crate::infrastructure::html_response::{accepts_brotli, html_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Serialize)]
pub struct ChartDataset {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: crate::domain::chart::ChartKind,
    pub data: Vec<Value>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full case-study page
pub async fn case_study_page(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);
    let page = state.case_study_service.render_page().into_string();

    match html_response(page, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Case-study page streamed section by section
pub async fn stream_case_study(State(state): State<Arc<AppState>>) -> Response {
    let service = &state.case_study_service;
    let sections = service
        .render_sections()
        .into_iter()
        .map(|(_, markup)| markup.into_string())
        .collect();

    match stream_chunks(document_chunks(service.document_open(), sections, DOCUMENT_CLOSE)) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Literal page content with resolved image URLs
pub async fn case_study_content(State(state): State<Arc<AppState>>) -> Response {
    Json(state.case_study_service.content_snapshot()).into_response()
}

/// Dataset of one chart, as records keyed by the chart's own field names
pub async fn chart_dataset(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match state.case_study_service.chart(&id) {
        Some(chart) => Json(ChartDataset {
            id: chart.id,
            title: chart.title,
            kind: chart.kind,
            data: chart.records(),
        })
        .into_response(),
        None => {
            tracing::debug!("Unknown chart {}", id);
            (StatusCode::NOT_FOUND, format!("unknown chart {}", id)).into_response()
        }
    }
}
