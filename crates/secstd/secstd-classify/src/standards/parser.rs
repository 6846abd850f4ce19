//! Tag parser: splits raw `<prefix>:<value>` tags into per-taxonomy
//! identifier sets.

use std::collections::BTreeSet;

use serde::Serialize;

use super::taxonomy::{CWE_PREFIX, UNKNOWN_STANDARD};

/// Values of every tag starting with `prefix`, prefix stripped.
///
/// Literal, case-sensitive prefix test. An empty result means the finding
/// carries nothing for that taxonomy.
pub fn matching_standards(standards: &BTreeSet<String>, prefix: &str) -> BTreeSet<String> {
    standards
        .iter()
        .filter_map(|s| s.strip_prefix(prefix))
        .map(str::to_string)
        .collect()
}

/// CWE identifiers of a tag set, or `{"unknown"}` when there are none.
pub fn to_cwes(standards: &BTreeSet<String>) -> BTreeSet<String> {
    let cwes = matching_standards(standards, CWE_PREFIX);
    if cwes.is_empty() {
        BTreeSet::from([UNKNOWN_STANDARD.to_string()])
    } else {
        cwes
    }
}

/// Deduplicated tags of a finding and the CWE identifiers derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedStandards {
    standards: BTreeSet<String>,
    cwe: BTreeSet<String>,
}

impl ParsedStandards {
    /// Parse raw tags. Empty strings are dropped before anything else.
    pub fn parse<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_optional(tags.into_iter().map(Some))
    }

    /// Parse raw tags where upstream may hand over missing entries.
    /// `None` and empty strings are filtered out, never rejected.
    pub fn parse_optional<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let standards: BTreeSet<String> = tags
            .into_iter()
            .flatten()
            .filter(|t| !t.as_ref().is_empty())
            .map(|t| t.as_ref().to_string())
            .collect();
        let cwe = to_cwes(&standards);
        Self { standards, cwe }
    }

    pub fn standards(&self) -> &BTreeSet<String> {
        &self.standards
    }

    pub fn cwe(&self) -> &BTreeSet<String> {
        &self.cwe
    }

    pub(crate) fn into_parts(self) -> (BTreeSet<String>, BTreeSet<String>) {
        (self.standards, self.cwe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let standards = set(&["cwe:89", "CWE:79", "cwe:"]);
        assert_eq!(matching_standards(&standards, "cwe:"), set(&["89", ""]));
    }

    #[test]
    fn missing_cwe_defaults_to_unknown() {
        let parsed = ParsedStandards::parse(["owaspTop10:a1"]);
        assert_eq!(parsed.cwe(), &set(&["unknown"]));
    }

    #[test]
    fn none_and_empty_entries_are_dropped() {
        let parsed = ParsedStandards::parse_optional([Some("cwe:89"), None, Some("")]);
        assert_eq!(parsed.standards(), &set(&["cwe:89"]));
        assert_eq!(parsed.cwe(), &set(&["89"]));
    }
}
