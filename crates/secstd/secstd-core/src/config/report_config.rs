//! Aggregate report configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the aggregate standards report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// CWE Top 25 years to tally. Empty means every published year.
    pub top25_years: Vec<String>,
    /// Tally the deprecated SANS Top 25 grouping. Default: false.
    pub include_sans_top25: Option<bool>,
    /// List the `others` fallback bucket. Default: true.
    pub include_others: Option<bool>,
}

impl ReportConfig {
    /// Returns whether the legacy SANS Top 25 tally is included, defaulting to false.
    pub fn effective_include_sans_top25(&self) -> bool {
        self.include_sans_top25.unwrap_or(false)
    }

    /// Returns whether the `others` bucket is listed, defaulting to true.
    pub fn effective_include_others(&self) -> bool {
        self.include_others.unwrap_or(true)
    }
}
