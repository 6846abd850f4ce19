//! Category classification with priority tie-break.

use std::collections::BTreeSet;

use super::category::SqCategory;
use super::registry::StandardsRegistry;

/// Outcome of classifying one finding's CWE identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub primary: SqCategory,
    /// Categories that also matched but lost the tie-break. Never contains
    /// `primary`.
    pub ignored: BTreeSet<SqCategory>,
}

/// Every category whose membership intersects `cwes`, in priority order.
/// Falls back to `[Others]` when nothing matches.
pub fn sorted_categories<'a, I>(cwes: I) -> Vec<SqCategory>
where
    I: IntoIterator<Item = &'a str>,
{
    let registry = StandardsRegistry::global();
    let matched: BTreeSet<SqCategory> = cwes
        .into_iter()
        .flat_map(|cwe| registry.categories_for_cwe(cwe).iter().copied())
        .collect();

    if matched.is_empty() {
        vec![SqCategory::Others]
    } else {
        matched.into_iter().collect()
    }
}

/// Pick the primary category for `cwes`; the remaining matches are ignored.
pub fn classify<'a, I>(cwes: I) -> Classification
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted = sorted_categories(cwes).into_iter();
    // sorted_categories never returns an empty list
    let primary = sorted.next().unwrap_or(SqCategory::Others);
    Classification {
        primary,
        ignored: sorted.collect(),
    }
}
