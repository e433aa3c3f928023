//! Two-pass heuristic summary generation
//!
//! Pass 1 keeps sentences containing an importance keyword. When that
//! yields fewer than three points, pass 2 tops the list up with
//! obligation-language sentences ("must", "shall", ...) that were not
//! already selected. Both passes share the same display cleanup, so a
//! summary point never starts with "you " regardless of which pass
//! produced it. Output preserves document order within each pass and never
//! exceeds five points.

use lazy_static::lazy_static;
use regex::Regex;

use crate::vocabulary::{contains_any_keyword, OBLIGATION_KEYWORDS, SUMMARY_KEYWORDS};

/// Maximum number of summary points.
pub const MAX_SUMMARY_POINTS: usize = 5;

/// Below this many primary points the fallback pass kicks in.
const MIN_PRIMARY_POINTS: usize = 3;

lazy_static! {
    static ref LEADING_YOU: Regex = Regex::new(r"(?i)^(?:you\s+)+").unwrap();

    /// Boilerplate service phrases stripped from summary points.
    static ref SERVICE_PHRASES: Vec<Regex> = vec![
        Regex::new(r"(?i)\s+by\s+using\s+this\s+service").unwrap(),
        Regex::new(r"(?i)\s+when\s+you\s+use\s+this\s+service").unwrap(),
        Regex::new(r"(?i)\s+in\s+connection\s+with\s+this\s+service").unwrap(),
    ];
}

/// Build the summary from segmented sentences.
pub fn generate_summary(sentences: &[String]) -> Vec<String> {
    let mut points = Vec::new();
    let mut selected = vec![false; sentences.len()];

    for (index, sentence) in sentences.iter().enumerate() {
        if points.len() == MAX_SUMMARY_POINTS {
            break;
        }
        if contains_any_keyword(&sentence.to_lowercase(), SUMMARY_KEYWORDS) {
            points.push(clean_point(sentence));
            selected[index] = true;
        }
    }

    if points.len() < MIN_PRIMARY_POINTS {
        let room = MAX_SUMMARY_POINTS - points.len();
        let fallback = sentences
            .iter()
            .enumerate()
            .filter(|(index, sentence)| {
                !selected[*index]
                    && contains_any_keyword(&sentence.to_lowercase(), OBLIGATION_KEYWORDS)
            })
            .map(|(_, sentence)| clean_point(sentence))
            .take(room);
        points.extend(fallback);
    }

    points
}

/// Clean one sentence for display: drop a leading "you ", strip service
/// boilerplate, capitalize, terminate with a period.
fn clean_point(sentence: &str) -> String {
    let mut clean = sentence.trim().to_string();
    clean = LEADING_YOU.replace(&clean, "").into_owned();
    for phrase in SERVICE_PHRASES.iter() {
        clean = phrase.replace(&clean, "").into_owned();
    }
    ensure_period(&capitalize_first(clean.trim()))
}

fn capitalize_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn ensure_period(sentence: &str) -> String {
    if sentence.ends_with('.') {
        sentence.to_string()
    } else {
        format!("{}.", sentence)
    }
}
