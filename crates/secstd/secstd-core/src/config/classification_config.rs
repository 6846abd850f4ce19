//! Classification configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PARALLEL_THRESHOLD;

/// Configuration for the classification subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Batch size at or above which batch classification runs on the rayon
    /// pool. Default: 256.
    pub parallel_threshold: Option<usize>,
    /// Emit a debug event whenever the tie-break suppresses categories.
    /// Default: true.
    pub log_ignored_categories: Option<bool>,
}

impl ClassificationConfig {
    /// Returns the effective parallel threshold, defaulting to 256.
    pub fn effective_parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Returns whether ignored categories are logged, defaulting to true.
    pub fn effective_log_ignored_categories(&self) -> bool {
        self.log_ignored_categories.unwrap_or(true)
    }
}
