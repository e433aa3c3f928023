//! Application state for the terms API

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use terms_engine::session::AnalysisSession;
use terms_engine::TermsEngine;

pub struct AppState {
    pub engine: TermsEngine,
    /// Process-wide pause flag; a caller-side gate, the engine itself is
    /// never paused.
    paused: AtomicBool,
    /// Per-document analysis sessions, keyed by caller-supplied id. Holds
    /// only session flags, never analysis results.
    sessions: Mutex<HashMap<String, AnalysisSession>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: TermsEngine::new(),
            paused: AtomicBool::new(false),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    /// Borrow the session for one document, creating it on first use.
    pub fn with_session<F, R>(&self, document_id: &str, f: F) -> R
    where
        F: FnOnce(&mut AnalysisSession) -> R,
    {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let session = sessions.entry(document_id.to_string()).or_default();
        f(session)
    }
}
