pub mod locator;
pub mod risks;
pub mod segment;
pub mod session;
pub mod summary;
pub mod vocabulary;

use shared_types::{AnalysisReport, CandidateBlock, TermsError};

use crate::locator::DocumentSource;
use crate::segment::{PunctuationSegmenter, SentenceSegmenter};

/// TermsEngine entry point
///
/// Pure functions over in-memory text: `scan` locates the most plausible
/// terms block, `analyze` locates and produces a summary plus risk
/// keywords. Neither holds state between invocations; the single-flight
/// guard lives in [`session::AnalysisSession`].
pub struct TermsEngine {
    segmenter: Box<dyn SentenceSegmenter>,
}

impl TermsEngine {
    pub fn new() -> Self {
        Self {
            segmenter: Box::new(PunctuationSegmenter),
        }
    }

    /// Swap in an alternative sentence boundary detector.
    pub fn with_segmenter(segmenter: Box<dyn SentenceSegmenter>) -> Self {
        Self { segmenter }
    }

    /// Locate only. Powers the "content found" affordance: callers need
    /// just the presence of the returned block.
    pub fn scan(&self, doc: &impl DocumentSource) -> Option<CandidateBlock> {
        locator::locate_terms_content(doc)
    }

    /// Locate and analyze in one step.
    pub fn analyze(&self, doc: &impl DocumentSource) -> Result<AnalysisReport, TermsError> {
        let block = locator::locate_terms_content(doc).ok_or(TermsError::NoContent)?;
        self.analyze_text(&block.text)
    }

    /// Analyze text a caller already extracted. Empty input is an error,
    /// never an empty report.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisReport, TermsError> {
        if text.trim().is_empty() {
            return Err(TermsError::NoContent);
        }

        let sentences = self.segmenter.segment(text);
        let summary = summary::generate_summary(&sentences);
        let risks = risks::identify_risks(text);

        Ok(AnalysisReport {
            summary,
            risks,
            analyzed_at: chrono::Utc::now().timestamp() as u64,
        })
    }
}

impl Default for TermsEngine {
    fn default() -> Self {
        Self::new()
    }
}
