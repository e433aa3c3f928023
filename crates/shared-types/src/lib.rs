pub mod error;
pub mod types;

pub use error::TermsError;
pub use types::{AnalysisOutcome, AnalysisReport, CandidateBlock, SelectorTier};
