//! Batch classification of many findings' tag sets.

use rayon::prelude::*;

use secstd_core::config::ClassificationConfig;

use crate::standards::{ParsedStandards, SecurityStandards};

/// Classify each tag set, preserving input order.
///
/// Runs on the rayon pool once the batch reaches the configured parallel
/// threshold; both paths produce identical results.
pub fn classify_batch<T, S>(findings: &[T], config: &ClassificationConfig) -> Vec<SecurityStandards>
where
    T: AsRef<[S]> + Sync,
    S: AsRef<str> + Sync,
{
    let threshold = config.effective_parallel_threshold();
    let parallel = findings.len() >= threshold;
    tracing::debug!(findings = findings.len(), threshold, parallel, "classifying batch");

    let classify_one =
        |tags: &T| SecurityStandards::from_parsed(ParsedStandards::parse(tags.as_ref()), config);

    if parallel {
        findings.par_iter().map(classify_one).collect()
    } else {
        findings.iter().map(classify_one).collect()
    }
}
