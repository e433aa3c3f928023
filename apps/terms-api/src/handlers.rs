//! HTTP handlers for the terms API

use axum::{extract::State, Json};
use std::sync::Arc;

use page_source::HtmlDocument;
use shared_types::AnalysisOutcome;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// URL schemes the analyzer refuses to touch: browser-internal pages and
/// local files.
pub const RESTRICTED_SCHEMES: &[&str] = &["chrome://", "edge://", "about:", "file://"];

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Locate-only scan: reports whether a qualifying terms block exists.
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, ApiError> {
    if req.html.is_empty() {
        return Err(ApiError::InvalidRequest("html must not be empty".to_string()));
    }

    let doc = HtmlDocument::parse(&req.html);
    let content_found = state.engine.scan(&doc).is_some();
    tracing::debug!(content_found, "page scanned");

    Ok(Json(ScanResponse { content_found }))
}

/// Locate and analyze the page's terms content.
///
/// The pause flag is a caller-side gate checked before anything runs. A
/// request arriving while the same document is being analyzed gets the
/// `already_running` outcome and no second analysis starts.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisOutcome>, ApiError> {
    if state.is_paused() {
        return Err(ApiError::Paused);
    }
    if let Some(url) = &req.url {
        if is_restricted_url(url) {
            return Err(ApiError::RestrictedUrl(url.clone()));
        }
    }

    let document_id = req.document_id.as_deref().unwrap_or("default");
    let doc = HtmlDocument::parse(&req.html);
    let outcome = state.with_session(document_id, |session| {
        if session.initialize() {
            tracing::debug!(document_id, "session created");
        }
        session.run(|| state.engine.analyze(&doc))
    })?;

    match &outcome {
        AnalysisOutcome::Completed(report) => {
            tracing::info!(
                summary_points = report.summary.len(),
                risks = report.risks.len(),
                "analysis completed"
            );
        }
        AnalysisOutcome::AlreadyRunning => {
            tracing::debug!(document_id, "analysis already in flight, request ignored");
        }
    }

    Ok(Json(outcome))
}

/// Read the process-wide pause flag.
pub async fn get_pause(State(state): State<Arc<AppState>>) -> Json<PauseState> {
    Json(PauseState {
        paused: state.is_paused(),
    })
}

/// Set the process-wide pause flag.
pub async fn set_pause(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PauseState>,
) -> Json<PauseState> {
    state.set_paused(req.paused);
    tracing::info!(paused = req.paused, "pause state updated");
    Json(PauseState { paused: req.paused })
}

fn is_restricted_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    RESTRICTED_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}
