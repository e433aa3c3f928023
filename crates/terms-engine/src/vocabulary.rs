//! Fixed keyword vocabularies and selector tier tables
//!
//! All matching is case-insensitive substring containment against a
//! lowercased copy of the text. Order matters: risk output is reported in
//! vocabulary order, and selectors are evaluated in listed order with
//! short-circuiting.

/// Risk keywords indicating legally consequential clause categories.
pub const RISK_KEYWORDS: &[&str] = &[
    "liability",
    "warranty",
    "indemnify",
    "arbitration",
    "termination",
    "disclaimer",
    "limitation",
    "exclusion",
    "waiver",
    "jurisdiction",
];

/// Importance keywords used to rank sentences for the summary.
pub const SUMMARY_KEYWORDS: &[&str] = &[
    "privacy",
    "data",
    "personal information",
    "collection",
    "use",
    "share",
    "liability",
    "responsibility",
    "warranty",
    "guarantee",
    "damages",
    "termination",
    "cancel",
    "suspend",
    "account",
    "access",
    "intellectual property",
    "copyright",
    "trademark",
    "license",
    "governance",
    "law",
    "jurisdiction",
    "dispute",
    "arbitration",
    "modification",
    "change",
    "update",
    "notification",
    "third party",
    "partner",
    "affiliate",
    "service provider",
];

/// Obligation keywords for the summary fallback pass.
pub const OBLIGATION_KEYWORDS: &[&str] = &[
    "must",
    "shall",
    "required",
    "obligation",
    "agree",
    "accept",
];

/// Legal-context keywords a specific-tier candidate must contain.
pub const CONTEXT_KEYWORDS: &[&str] = &[
    "terms",
    "conditions",
    "privacy",
    "agreement",
    "service",
];

/// Tier 1: generic primary-content containers.
pub const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    ".content",
    "#content",
    ".terms-content",
    ".terms-body",
    ".terms-container",
    ".legal-content",
    ".legal-body",
    ".legal-container",
    "[role=\"main\"]",
    "[role=\"article\"]",
];

/// Tier 2: selectors keyed to explicit legal vocabulary, plus a generic
/// `section` fallback and site-specific structural selectors (Google's Maia
/// layout classes, where terms pages carry no semantic markup).
pub const SPECIFIC_TERMS_SELECTORS: &[&str] = &[
    ".terms",
    ".conditions",
    ".terms-conditions",
    ".terms-of-service",
    ".tos",
    ".privacy-policy",
    ".legal",
    ".agreement",
    "[id*=\"terms\"]",
    "[id*=\"conditions\"]",
    "[id*=\"agreement\"]",
    "[id*=\"legal\"]",
    "[id*=\"privacy\"]",
    "section",
    "div[role=\"main\"]",
    "div[role=\"article\"]",
    ".maia-article",
    ".maia-col",
    ".maia-col-6",
    ".maia-col-8",
    ".maia-col-9",
    ".maia-col-10",
    ".maia-col-12",
];

/// Minimum character count for a selector-tier candidate.
pub const BLOCK_MIN_LENGTH: usize = 500;

/// Minimum character count for the whole-document fallback. Higher than the
/// block threshold because full-page text dilutes signal with navigation and
/// footer boilerplate.
pub const DOCUMENT_MIN_LENGTH: usize = 1000;

/// Check if lowercased text contains any keyword from a group.
pub fn contains_any_keyword(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}
