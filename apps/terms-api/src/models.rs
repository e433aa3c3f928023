//! Request/response models for the terms API

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    /// Whether a qualifying terms block was found; drives the caller's
    /// toggle affordance and nothing else.
    pub content_found: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub html: String,
    /// Stable page identifier used to key the per-document session.
    #[serde(default)]
    pub document_id: Option<String>,
    /// Original page URL; restricted schemes are rejected.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PauseState {
    pub paused: bool,
}
