//! Sentence segmentation
//!
//! Splits legal prose into discrete, summarizable units. The default
//! segmenter splits on runs of `.`, `!`, `?` and knows nothing about
//! abbreviations or decimal numbers, so "e.g." splits into two fragments.
//! That behavior is pinned by tests; the trait is the seam for a smarter
//! boundary detector, which can be swapped in without touching the scoring
//! logic downstream.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Splits text into candidate sentences.
pub trait SentenceSegmenter: Send + Sync {
    /// Fragments are returned in document order with surrounding whitespace
    /// preserved; empty and whitespace-only fragments are dropped.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Naive punctuation-run segmenter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PunctuationSegmenter;

impl SentenceSegmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        SENTENCE_BOUNDARY
            .split(text)
            .filter(|fragment| !fragment.trim().is_empty())
            .map(|fragment| fragment.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_splits_on_punctuation_runs() {
        let segmenter = PunctuationSegmenter;
        let sentences = segmenter.segment("First point. Second point! Third?");
        assert_eq!(
            sentences,
            vec![
                "First point".to_string(),
                " Second point".to_string(),
                " Third".to_string(),
            ]
        );
    }

    #[test]
    fn test_drops_empty_fragments() {
        let segmenter = PunctuationSegmenter;
        let sentences = segmenter.segment("One... Two.  . Three.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn test_mis_splits_abbreviations() {
        // Known limitation, preserved deliberately: "e.g." is treated as
        // two sentence boundaries.
        let segmenter = PunctuationSegmenter;
        let sentences = segmenter.segment("Some rights, e.g. copyright, apply.");
        assert_eq!(
            sentences,
            vec![
                "Some rights, e".to_string(),
                "g".to_string(),
                " copyright, apply".to_string(),
            ]
        );
    }

    #[test]
    fn test_whitespace_only_input_yields_nothing() {
        let segmenter = PunctuationSegmenter;
        assert!(segmenter.segment("   \n\t ").is_empty());
        assert!(segmenter.segment("").is_empty());
    }
}
