//! Report generator: tallies classified findings by category, vulnerability
//! probability, CWE Top 25 year and external taxonomy identifier.

use std::collections::{BTreeMap, BTreeSet};

use secstd_core::config::ReportConfig;
use secstd_core::errors::StandardsError;

use super::types::*;
use crate::standards::{SecurityStandards, SqCategory, StandardsRegistry, CATEGORY_PRIORITY};

/// Generate a report from classified findings.
///
/// Fails only when `config.top25_years` names a year with no published list.
pub fn generate_report(
    findings: &[SecurityStandards],
    config: &ReportConfig,
) -> Result<StandardsReport, StandardsError> {
    let registry = StandardsRegistry::global();
    let years: BTreeSet<String> = if config.top25_years.is_empty() {
        registry.top25_years().map(str::to_string).collect()
    } else {
        if let Some(year) = config.top25_years.iter().find(|y| !registry.has_top25_year(y)) {
            return Err(StandardsError::UnknownTop25Year(year.clone()));
        }
        config.top25_years.iter().cloned().collect()
    };

    let mut per_category: BTreeMap<SqCategory, u32> = BTreeMap::new();
    let mut by_vulnerability = VulnerabilityCounts::default();
    let mut cwe_top25: BTreeMap<String, u32> = years.iter().map(|y| (y.clone(), 0)).collect();
    let mut findings_with_ignored_categories = 0u32;
    let mut sans_top25: Option<BTreeMap<String, u32>> =
        config.effective_include_sans_top25().then(BTreeMap::new);
    let mut taxonomies = TaxonomyCounts::default();

    for finding in findings {
        let category = finding.sq_category();
        *per_category.entry(category).or_insert(0) += 1;
        by_vulnerability.record(category.vulnerability());

        if !finding.ignored_sq_categories().is_empty() {
            findings_with_ignored_categories += 1;
        }

        for year in finding.cwe_top25().intersection(&years) {
            *cwe_top25.entry(year.clone()).or_insert(0) += 1;
        }

        if let Some(tally) = sans_top25.as_mut() {
            #[allow(deprecated)]
            let groups = finding.sans_top25();
            tally_all(tally, groups);
        }

        tally_all(&mut taxonomies.owasp_top10, finding.owasp_top10());
        tally_all(&mut taxonomies.owasp_top10_2021, finding.owasp_top10_2021());
        tally_all(&mut taxonomies.pci_dss_32, finding.pci_dss_32());
        tally_all(&mut taxonomies.pci_dss_40, finding.pci_dss_40());
        tally_all(&mut taxonomies.owasp_asvs_40, finding.owasp_asvs_40());
    }

    let include_others = config.effective_include_others();
    let categories = CATEGORY_PRIORITY
        .iter()
        .filter(|c| include_others || **c != SqCategory::Others)
        .filter_map(|c| {
            per_category.get(c).map(|&count| CategoryCount {
                category: *c,
                vulnerability: c.vulnerability(),
                count,
            })
        })
        .collect();

    tracing::debug!(findings = findings.len(), years = years.len(), "standards report generated");

    Ok(StandardsReport {
        total_findings: saturating_count(findings.len()),
        categories,
        by_vulnerability,
        cwe_top25,
        findings_with_ignored_categories,
        sans_top25,
        taxonomies,
    })
}

/// Count as `u32`, pinned at `u32::MAX` instead of wrapping.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn tally_all(tally: &mut BTreeMap<String, u32>, keys: BTreeSet<String>) {
    for key in keys {
        *tally.entry(key).or_insert(0) += 1;
    }
}

impl StandardsReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_saturates_instead_of_wrapping() {
        assert_eq!(saturating_count(0), 0);
        assert_eq!(saturating_count(5), 5);
        assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
        if let Some(over) = (u32::MAX as usize).checked_add(1) {
            assert_eq!(saturating_count(over), u32::MAX);
        }
    }
}
