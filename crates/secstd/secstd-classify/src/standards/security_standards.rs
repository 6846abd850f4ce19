//! The immutable classification result of a finding's security tags.

use std::collections::BTreeSet;

use serde::Serialize;

use secstd_core::config::ClassificationConfig;

use super::category::SqCategory;
use super::classifier::classify;
use super::parser::{matching_standards, ParsedStandards};
use super::taxonomy::{
    OwaspAsvsVersion, PciDssVersion, OWASP_TOP10_2021_PREFIX, OWASP_TOP10_PREFIX,
};
use super::top25::to_cwe_top25;

/// Security standards of a finding: its normalized tags, CWE identifiers,
/// primary category and the categories suppressed by the tie-break.
///
/// Built once from a tag set and never mutated. Per-taxonomy views are
/// projections of `standards` and never influence the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityStandards {
    standards: BTreeSet<String>,
    cwe: BTreeSet<String>,
    sq_category: SqCategory,
    ignored_sq_categories: BTreeSet<SqCategory>,
}

impl SecurityStandards {
    /// Classify a finding's raw tags. Empty tags are skipped.
    pub fn from_security_standards<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_parsed(ParsedStandards::parse(tags), &ClassificationConfig::default())
    }

    /// Classify tags where some entries may be missing; `None` and empty
    /// strings are dropped rather than rejected.
    pub fn from_optional_standards<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        Self::from_parsed(
            ParsedStandards::parse_optional(tags),
            &ClassificationConfig::default(),
        )
    }

    pub fn from_parsed(parsed: ParsedStandards, config: &ClassificationConfig) -> Self {
        let (standards, cwe) = parsed.into_parts();
        let classification = classify(cwe.iter().map(String::as_str));

        if config.effective_log_ignored_categories() && !classification.ignored.is_empty() {
            tracing::debug!(
                primary = %classification.primary,
                ignored = ?classification.ignored.iter().map(SqCategory::key).collect::<Vec<_>>(),
                "CWEs map to several categories, keeping the highest priority"
            );
        }

        Self {
            standards,
            cwe,
            sq_category: classification.primary,
            ignored_sq_categories: classification.ignored,
        }
    }

    pub fn standards(&self) -> &BTreeSet<String> {
        &self.standards
    }

    /// CWE identifiers without the `cwe:` prefix; `{"unknown"}` when the
    /// finding had none.
    pub fn cwe(&self) -> &BTreeSet<String> {
        &self.cwe
    }

    pub fn owasp_top10(&self) -> BTreeSet<String> {
        matching_standards(&self.standards, OWASP_TOP10_PREFIX)
    }

    pub fn owasp_top10_2021(&self) -> BTreeSet<String> {
        matching_standards(&self.standards, OWASP_TOP10_2021_PREFIX)
    }

    pub fn pci_dss_32(&self) -> BTreeSet<String> {
        self.pci_dss(PciDssVersion::V3_2)
    }

    pub fn pci_dss_40(&self) -> BTreeSet<String> {
        self.pci_dss(PciDssVersion::V4_0)
    }

    pub fn pci_dss(&self, version: PciDssVersion) -> BTreeSet<String> {
        matching_standards(&self.standards, version.tag_prefix())
    }

    pub fn owasp_asvs_40(&self) -> BTreeSet<String> {
        matching_standards(&self.standards, OwaspAsvsVersion::V4_0.tag_prefix())
    }

    /// Years whose CWE Top 25 list contains one of this finding's CWEs.
    pub fn cwe_top25(&self) -> BTreeSet<String> {
        to_cwe_top25(&self.cwe)
    }

    /// Legacy SANS Top 25 groups. Kept for existing consumers only.
    #[deprecated(note = "the SANS Top 25 report is outdated; use cwe_top25")]
    #[allow(deprecated)]
    pub fn sans_top25(&self) -> BTreeSet<String> {
        super::top25::to_sans_top25(&self.cwe)
    }

    pub fn sq_category(&self) -> SqCategory {
        self.sq_category
    }

    /// Categories the CWEs also mapped to but which lost the tie-break.
    pub fn ignored_sq_categories(&self) -> &BTreeSet<SqCategory> {
        &self.ignored_sq_categories
    }
}
