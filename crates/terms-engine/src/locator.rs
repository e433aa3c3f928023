//! Tiered location of terms-and-conditions content
//!
//! Three tiers, evaluated in order with short-circuiting:
//! 1. Main - well-structured primary-content containers
//! 2. Specific - legal-vocabulary selectors, filtered by context keywords
//! 3. Fallback - the whole document's visible text
//!
//! Earlier tiers are preferred because full-page text dilutes signal with
//! navigation and footer boilerplate. Within a tier the first selector that
//! yields any passing candidate wins; among that selector's candidates the
//! longest text wins.

use shared_types::{CandidateBlock, SelectorTier};

use crate::vocabulary::{
    contains_any_keyword, BLOCK_MIN_LENGTH, CONTEXT_KEYWORDS, DOCUMENT_MIN_LENGTH,
    MAIN_CONTENT_SELECTORS, SPECIFIC_TERMS_SELECTORS,
};

/// Selector used when the whole-document fallback produces the candidate.
pub const DOCUMENT_SELECTOR: &str = "<document>";

/// Document access collaborator.
///
/// Any mechanism that can resolve a CSS-like selector to the visible text of
/// matching elements: a real DOM, a headless parser, or a test fixture.
/// Implementations must treat invalid or unsupported selectors as "no
/// match", never as a fatal error.
pub trait DocumentSource {
    /// Visible text of every element matching `selector`, in document order.
    fn select_text(&self, selector: &str) -> Vec<String>;

    /// Visible text of the entire document.
    fn document_text(&self) -> String;
}

/// Pick the single block most likely to be the terms/legal content, or
/// `None` when no tier yields a qualifying candidate.
///
/// Read-only and infallible: selector failures inside the source surface as
/// empty matches and evaluation moves on.
pub fn locate_terms_content(doc: &impl DocumentSource) -> Option<CandidateBlock> {
    for selector in MAIN_CONTENT_SELECTORS {
        if let Some(text) = best_candidate(doc, selector, |_| true) {
            return Some(CandidateBlock::new(SelectorTier::Main, *selector, text));
        }
    }

    for selector in SPECIFIC_TERMS_SELECTORS {
        if let Some(text) = best_candidate(doc, selector, |text| {
            contains_any_keyword(&text.to_lowercase(), CONTEXT_KEYWORDS)
        }) {
            return Some(CandidateBlock::new(SelectorTier::Specific, *selector, text));
        }
    }

    let all_text = doc.document_text().trim().to_string();
    if all_text.chars().count() > DOCUMENT_MIN_LENGTH {
        return Some(CandidateBlock::new(
            SelectorTier::Fallback,
            DOCUMENT_SELECTOR,
            all_text,
        ));
    }

    None
}

/// Longest trimmed text among a selector's matches that exceeds the block
/// threshold and passes `filter`.
fn best_candidate(
    doc: &impl DocumentSource,
    selector: &str,
    filter: impl Fn(&str) -> bool,
) -> Option<String> {
    doc.select_text(selector)
        .into_iter()
        .map(|text| text.trim().to_string())
        .filter(|text| text.chars().count() > BLOCK_MIN_LENGTH && filter(text))
        .max_by_key(|text| text.chars().count())
}

/// In-memory `DocumentSource` for tests and fixtures: a flat list of
/// (selector, text) pairs plus an optional whole-document body.
#[derive(Debug, Default, Clone)]
pub struct FixtureDocument {
    elements: Vec<(String, String)>,
    body: String,
}

impl FixtureDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element's text under a selector. Repeated calls with the
    /// same selector model multiple matching elements.
    pub fn with_element(mut self, selector: impl Into<String>, text: impl Into<String>) -> Self {
        self.elements.push((selector.into(), text.into()));
        self
    }

    pub fn with_body(mut self, text: impl Into<String>) -> Self {
        self.body = text.into();
        self
    }
}

impl DocumentSource for FixtureDocument {
    fn select_text(&self, selector: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|(registered, _)| registered == selector)
            .map(|(_, text)| text.clone())
            .collect()
    }

    fn document_text(&self) -> String {
        self.body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn long_text(prefix: &str, len: usize) -> String {
        let mut text = String::from(prefix);
        while text.chars().count() <= len {
            text.push_str(" lorem");
        }
        text
    }

    #[test]
    fn test_main_tier_takes_longest_match_for_first_selector() {
        let doc = FixtureDocument::new()
            .with_element("main", long_text("short terms", 501))
            .with_element("main", long_text("longer terms text", 900));
        let block = locate_terms_content(&doc).unwrap();
        assert_eq!(block.tier, SelectorTier::Main);
        assert_eq!(block.selector, "main");
        assert!(block.text.starts_with("longer terms text"));
    }

    #[test]
    fn test_main_tier_short_circuits_later_tiers() {
        // Tier-1 hit must win even when a tier-2 selector holds longer text.
        let doc = FixtureDocument::new()
            .with_element("article", long_text("agreement body", 600))
            .with_element(".terms", long_text("terms terms terms", 5000));
        let block = locate_terms_content(&doc).unwrap();
        assert_eq!(block.tier, SelectorTier::Main);
        assert_eq!(block.selector, "article");
    }

    #[test]
    fn test_short_candidate_skips_to_next_selector() {
        let exactly_500: String = "x".repeat(500);
        let doc = FixtureDocument::new()
            .with_element("main", exactly_500)
            .with_element("article", long_text("article body", 700));
        let block = locate_terms_content(&doc).unwrap();
        assert_eq!(block.selector, "article");
    }

    #[test]
    fn test_specific_tier_requires_context_keyword() {
        // Long but context-free text in a tier-2 selector must not qualify.
        let doc = FixtureDocument::new()
            .with_element(".terms", long_text("generic filler about nothing", 800));
        assert!(locate_terms_content(&doc).is_none());
    }

    #[test]
    fn test_specific_tier_matches_context_case_insensitively() {
        let doc = FixtureDocument::new()
            .with_element(".legal", long_text("This PRIVACY statement covers", 800));
        let block = locate_terms_content(&doc).unwrap();
        assert_eq!(block.tier, SelectorTier::Specific);
        assert_eq!(block.selector, ".legal");
    }

    #[test]
    fn test_specific_tier_selector_order_wins_over_length() {
        let doc = FixtureDocument::new()
            .with_element("section", long_text("terms of service here", 3000))
            .with_element(".terms", long_text("the agreement text", 600));
        let block = locate_terms_content(&doc).unwrap();
        // ".terms" is listed before "section", so it wins despite being shorter.
        assert_eq!(block.selector, ".terms");
    }

    #[test]
    fn test_document_fallback_requires_over_1000_chars() {
        let doc = FixtureDocument::new().with_body("x".repeat(1000));
        assert!(locate_terms_content(&doc).is_none());

        let doc = FixtureDocument::new().with_body("x".repeat(1001));
        let block = locate_terms_content(&doc).unwrap();
        assert_eq!(block.tier, SelectorTier::Fallback);
        assert_eq!(block.selector, DOCUMENT_SELECTOR);
    }

    #[test]
    fn test_empty_document_yields_none() {
        assert!(locate_terms_content(&FixtureDocument::new()).is_none());
    }

    #[test]
    fn test_locate_is_idempotent() {
        let doc = FixtureDocument::new()
            .with_element("main", long_text("stable terms content", 700));
        let first = locate_terms_content(&doc).unwrap();
        let second = locate_terms_content(&doc).unwrap();
        assert_eq!(first.selector, second.selector);
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn test_candidate_text_is_trimmed() {
        let padded = format!("   {}   ", long_text("terms body", 700));
        let doc = FixtureDocument::new().with_element("main", padded);
        let block = locate_terms_content(&doc).unwrap();
        assert_eq!(block.text, block.text.trim());
        assert!(block.length > 500);
    }
}
