//! Aggregate report types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::standards::{SqCategory, VulnerabilityProbability};

/// Summary of the security standards of a set of findings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardsReport {
    pub total_findings: u32,
    /// Findings per primary category, in tie-break priority order.
    pub categories: Vec<CategoryCount>,
    pub by_vulnerability: VulnerabilityCounts,
    /// Findings per CWE Top 25 year they fall into.
    pub cwe_top25: BTreeMap<String, u32>,
    /// Findings whose CWEs matched more than one category.
    pub findings_with_ignored_categories: u32,
    /// Deprecated SANS Top 25 tally, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sans_top25: Option<BTreeMap<String, u32>>,
    pub taxonomies: TaxonomyCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: SqCategory,
    pub vulnerability: VulnerabilityProbability,
    pub count: u32,
}

/// Findings per primary-category vulnerability probability.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VulnerabilityCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl VulnerabilityCounts {
    pub fn record(&mut self, probability: VulnerabilityProbability) {
        match probability {
            VulnerabilityProbability::High => self.high += 1,
            VulnerabilityProbability::Medium => self.medium += 1,
            VulnerabilityProbability::Low => self.low += 1,
        }
    }
}

/// Findings per identifier, for each external taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaxonomyCounts {
    pub owasp_top10: BTreeMap<String, u32>,
    pub owasp_top10_2021: BTreeMap<String, u32>,
    pub pci_dss_32: BTreeMap<String, u32>,
    pub pci_dss_40: BTreeMap<String, u32>,
    pub owasp_asvs_40: BTreeMap<String, u32>,
}
