//! "Top N" membership queries over a finding's CWE identifiers.
//! Plain set intersection, every matching year or group is reported.

use std::collections::BTreeSet;

use super::registry::StandardsRegistry;

/// Years whose CWE Top 25 list contains any of `cwes`.
pub fn to_cwe_top25(cwes: &BTreeSet<String>) -> BTreeSet<String> {
    StandardsRegistry::global().top25_years_matching(cwes)
}

/// Legacy SANS Top 25 groups containing any of `cwes`.
#[deprecated(note = "the SANS Top 25 report is outdated; use to_cwe_top25")]
pub fn to_sans_top25(cwes: &BTreeSet<String>) -> BTreeSet<String> {
    StandardsRegistry::global().sans_groups_matching(cwes)
}
