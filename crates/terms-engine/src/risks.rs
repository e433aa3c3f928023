//! Risk keyword identification
//!
//! Output order is vocabulary order, not document order, and a keyword is
//! reported at most once regardless of how often it appears.

use crate::vocabulary::RISK_KEYWORDS;

/// Scan the full text for risk keywords.
pub fn identify_risks(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut risks = Vec::new();

    for keyword in RISK_KEYWORDS {
        if text_lower.contains(keyword) {
            risks.push(keyword.to_string());
        }
    }

    risks
}
