//! Errors from parsing security-standard identifiers.
//!
//! Classification itself never fails; these only surface from the
//! string/score conversions and from report construction.

use super::error_code::{self, SecStdErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StandardsError {
    #[error("Unknown category key: {0}")]
    UnknownCategory(String),

    #[error("No vulnerability probability has score {0}")]
    UnknownProbabilityScore(i32),

    #[error("No CWE Top 25 list published for year {0}")]
    UnknownTop25Year(String),
}

impl SecStdErrorCode for StandardsError {
    fn error_code(&self) -> &'static str {
        error_code::STANDARDS_ERROR
    }
}
