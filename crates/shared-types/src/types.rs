//! Core data model for terms detection and analysis

use serde::{Deserialize, Serialize};

/// Priority group a candidate block was extracted from.
///
/// Tiers are evaluated in declaration order with short-circuiting: a hit in
/// an earlier tier means later tiers are never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorTier {
    /// Generic primary-content containers (`main`, `article`, content roles).
    Main,
    /// Selectors keyed to explicit legal vocabulary ("terms", "privacy", ...).
    Specific,
    /// Whole-document text, used only when both selector tiers come up empty.
    Fallback,
}

/// A contiguous unit of extracted page text considered as a possible
/// terms-and-conditions section.
///
/// Built fresh on every locate call and owned by that invocation; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateBlock {
    pub tier: SelectorTier,
    /// The selector that produced this block (`"<document>"` for the
    /// whole-document fallback).
    pub selector: String,
    /// Whitespace-trimmed visible text.
    pub text: String,
    /// Character count of `text`.
    pub length: usize,
}

impl CandidateBlock {
    pub fn new(tier: SelectorTier, selector: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            tier,
            selector: selector.into(),
            text,
            length,
        }
    }
}

/// Result of analyzing one candidate block.
///
/// Summary and risks are produced together or not at all; a partial report
/// is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// 0-5 cleaned-up sentences, in extraction order.
    pub summary: Vec<String>,
    /// Matched risk keywords, in vocabulary order, deduplicated.
    pub risks: Vec<String>,
    pub analyzed_at: u64,
}

/// Outcome of an analysis request routed through a session.
///
/// `AlreadyRunning` is the single-flight rejection: a second request while
/// one analysis is in flight is a no-op. Callers that want silent
/// rejection simply ignore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Completed(AnalysisReport),
    AlreadyRunning,
}
