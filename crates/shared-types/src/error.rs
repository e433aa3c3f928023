//! Error taxonomy for the terms engine
//!
//! Every failure is terminal to the current request only; a subsequent scan
//! or analysis is never affected by a prior error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermsError {
    /// All extraction tiers were exhausted without a qualifying candidate,
    /// or the analyzer was handed empty text.
    #[error("No terms and conditions content found")]
    NoContent,

    /// Unexpected failure while summarizing or risk-scanning non-empty text.
    /// Caught at the analyzer boundary and reported as a message.
    #[error("Analysis failed: {0}")]
    Analysis(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_message_is_user_facing() {
        assert_eq!(
            TermsError::NoContent.to_string(),
            "No terms and conditions content found"
        );
    }
}
