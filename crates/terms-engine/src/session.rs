//! Per-document analysis session
//!
//! Two small pieces of explicit state, both scoped to one host document:
//!
//! - an idempotent-initialization flag, so repeated injection into the same
//!   document sets up exactly once;
//! - the single-flight guard for analysis: IDLE -> ANALYZING ->
//!   {RESULT_READY | ERROR}. A request arriving while one analysis is in
//!   flight is rejected with a distinguishable outcome and does not disturb
//!   the in-flight analysis.
//!
//! The guard is a plain state field, not a lock. That is sound only under
//! the cooperative single-threaded model this engine assumes; callers that
//! share a session across threads must wrap it themselves.

use shared_types::{AnalysisOutcome, AnalysisReport, TermsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Analyzing,
    ResultReady,
    Error,
}

#[derive(Debug)]
pub struct AnalysisSession {
    initialized: bool,
    state: SessionState,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            initialized: false,
            state: SessionState::Idle,
        }
    }

    /// Idempotent-init guard: returns `true` on the first call only.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        true
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Engage the single-flight guard. Returns `false` when an analysis is
    /// already in flight, in which case the caller must not start another.
    pub fn try_begin(&mut self) -> bool {
        if self.state == SessionState::Analyzing {
            return false;
        }
        self.state = SessionState::Analyzing;
        true
    }

    /// Record the outcome of the analysis started by `try_begin`. The
    /// session is ready for the next request afterwards regardless of
    /// success or failure.
    pub fn finish(&mut self, success: bool) {
        self.state = if success {
            SessionState::ResultReady
        } else {
            SessionState::Error
        };
    }

    /// Run one analysis under the guard. Concurrent requests get
    /// `AlreadyRunning` without the closure being invoked.
    pub fn run<F>(&mut self, analysis: F) -> Result<AnalysisOutcome, TermsError>
    where
        F: FnOnce() -> Result<AnalysisReport, TermsError>,
    {
        if !self.try_begin() {
            return Ok(AnalysisOutcome::AlreadyRunning);
        }

        match analysis() {
            Ok(report) => {
                self.finish(true);
                Ok(AnalysisOutcome::Completed(report))
            }
            Err(err) => {
                self.finish(false);
                Err(err)
            }
        }
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}
