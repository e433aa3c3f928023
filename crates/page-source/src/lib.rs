//! HTML-backed document source
//!
//! Adapts a parsed HTML page to the engine's `DocumentSource` interface
//! using the `scraper` crate for CSS selector matching. Invalid selector
//! syntax is a recoverable "no match", never an error, which is what the
//! locator's per-selector short-circuiting relies on.

use scraper::{Html, Selector};
use terms_engine::locator::DocumentSource;

/// One parsed page. Cheap to construct per request; holds no state beyond
/// the parsed tree.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

impl DocumentSource for HtmlDocument {
    fn select_text(&self, selector: &str) -> Vec<String> {
        let Ok(parsed) = Selector::parse(selector) else {
            // Unsupported selector syntax: treated as "found nothing"
            return Vec::new();
        };
        self.html
            .select(&parsed)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect()
    }

    fn document_text(&self) -> String {
        self.html
            .root_element()
            .text()
            .collect::<String>()
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::SelectorTier;
    use terms_engine::locator::locate_terms_content;

    fn terms_paragraphs(n: usize) -> String {
        "You agree that our liability is limited under these terms of service. "
            .repeat(n)
    }

    #[test]
    fn test_select_text_concatenates_nested_text() {
        let doc = HtmlDocument::parse("<main>Hello <b>legal</b> world</main>");
        assert_eq!(doc.select_text("main"), vec!["Hello legal world".to_string()]);
    }

    #[test]
    fn test_invalid_selector_is_no_match() {
        let doc = HtmlDocument::parse("<main>text</main>");
        assert!(doc.select_text("ma[in><<").is_empty());
    }

    #[test]
    fn test_unmatched_selector_is_no_match() {
        let doc = HtmlDocument::parse("<main>text</main>");
        assert!(doc.select_text(".terms").is_empty());
    }

    #[test]
    fn test_document_text_covers_whole_page() {
        let doc = HtmlDocument::parse("<div>top</div><p>bottom</p>");
        assert_eq!(doc.document_text(), "topbottom");
    }

    #[test]
    fn test_locator_finds_main_content_in_html() {
        let html = format!(
            "<html><body><nav>About Contact</nav><main>{}</main></body></html>",
            terms_paragraphs(10)
        );
        let doc = HtmlDocument::parse(&html);
        let block = locate_terms_content(&doc).unwrap();
        assert_eq!(block.tier, SelectorTier::Main);
        assert_eq!(block.selector, "main");
        assert!(block.length > 500);
    }

    #[test]
    fn test_locator_falls_through_to_specific_tier() {
        let html = format!(
            "<html><body><div class=\"terms\">{}</div></body></html>",
            terms_paragraphs(10)
        );
        let doc = HtmlDocument::parse(&html);
        let block = locate_terms_content(&doc).unwrap();
        assert_eq!(block.tier, SelectorTier::Specific);
        assert_eq!(block.selector, ".terms");
    }

    #[test]
    fn test_attribute_substring_selectors_work() {
        let html = format!(
            "<html><body><div id=\"site-terms-2024\">{}</div></body></html>",
            terms_paragraphs(10)
        );
        let doc = HtmlDocument::parse(&html);
        let block = locate_terms_content(&doc).unwrap();
        assert_eq!(block.selector, "[id*=\"terms\"]");
    }

    #[test]
    fn test_short_page_yields_no_content() {
        let doc = HtmlDocument::parse("<html><body><p>tiny page</p></body></html>");
        assert!(locate_terms_content(&doc).is_none());
    }
}
