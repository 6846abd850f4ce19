//! Internal vulnerability categories and their likelihood labels.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use secstd_core::errors::StandardsError;

use super::registry::StandardsRegistry;

/// Likelihood that a finding in a category is a real vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VulnerabilityProbability {
    High,
    Medium,
    Low,
}

impl VulnerabilityProbability {
    pub fn all() -> &'static [VulnerabilityProbability] {
        &[Self::High, Self::Medium, Self::Low]
    }

    pub fn score(&self) -> i32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Reconstruct a probability from its score. `None` for a missing or
    /// unmatched score.
    pub fn by_score(score: Option<i32>) -> Option<Self> {
        let score = score?;
        Self::all().iter().copied().find(|p| p.score() == score)
    }
}

impl TryFrom<i32> for VulnerabilityProbability {
    type Error = StandardsError;

    fn try_from(score: i32) -> Result<Self, Self::Error> {
        Self::by_score(Some(score)).ok_or(StandardsError::UnknownProbabilityScore(score))
    }
}

/// Internal vulnerability category used for reporting.
///
/// Serialized as its stable key. Ordering follows [`CATEGORY_PRIORITY`],
/// not the variant order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqCategory {
    #[serde(rename = "buffer-overflow")]
    BufferOverflow,
    #[serde(rename = "sql-injection")]
    SqlInjection,
    #[serde(rename = "rce")]
    Rce,
    #[serde(rename = "object-injection")]
    ObjectInjection,
    #[serde(rename = "command-injection")]
    CommandInjection,
    #[serde(rename = "path-traversal-injection")]
    PathTraversalInjection,
    #[serde(rename = "ldap-injection")]
    LdapInjection,
    #[serde(rename = "xpath-injection")]
    XpathInjection,
    #[serde(rename = "log-injection")]
    LogInjection,
    #[serde(rename = "xxe")]
    Xxe,
    #[serde(rename = "xss")]
    Xss,
    #[serde(rename = "dos")]
    Dos,
    #[serde(rename = "ssrf")]
    Ssrf,
    #[serde(rename = "csrf")]
    Csrf,
    #[serde(rename = "http-response-splitting")]
    HttpResponseSplitting,
    #[serde(rename = "open-redirect")]
    OpenRedirect,
    #[serde(rename = "weak-cryptography")]
    WeakCryptography,
    #[serde(rename = "auth")]
    Auth,
    #[serde(rename = "insecure-conf")]
    InsecureConf,
    #[serde(rename = "file-manipulation")]
    FileManipulation,
    #[serde(rename = "encrypt-data")]
    EncryptionOfSensitiveData,
    #[serde(rename = "traceability")]
    Traceability,
    #[serde(rename = "permission")]
    Permission,
    #[serde(rename = "others")]
    Others,
}

/// Tie-break order over all categories: when several categories match a
/// finding, the one listed first here becomes the primary category.
/// `Others` is last and is never matched through CWE membership.
pub const CATEGORY_PRIORITY: [SqCategory; 24] = [
    SqCategory::BufferOverflow,
    SqCategory::SqlInjection,
    SqCategory::Rce,
    SqCategory::ObjectInjection,
    SqCategory::CommandInjection,
    SqCategory::PathTraversalInjection,
    SqCategory::LdapInjection,
    SqCategory::XpathInjection,
    SqCategory::LogInjection,
    SqCategory::Xxe,
    SqCategory::Xss,
    SqCategory::Dos,
    SqCategory::Ssrf,
    SqCategory::Csrf,
    SqCategory::HttpResponseSplitting,
    SqCategory::OpenRedirect,
    SqCategory::WeakCryptography,
    SqCategory::Auth,
    SqCategory::InsecureConf,
    SqCategory::FileManipulation,
    SqCategory::EncryptionOfSensitiveData,
    SqCategory::Traceability,
    SqCategory::Permission,
    SqCategory::Others,
];

impl SqCategory {
    /// Stable key; persisted and displayed by consumers, never change it.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BufferOverflow => "buffer-overflow",
            Self::SqlInjection => "sql-injection",
            Self::Rce => "rce",
            Self::ObjectInjection => "object-injection",
            Self::CommandInjection => "command-injection",
            Self::PathTraversalInjection => "path-traversal-injection",
            Self::LdapInjection => "ldap-injection",
            Self::XpathInjection => "xpath-injection",
            Self::LogInjection => "log-injection",
            Self::Xxe => "xxe",
            Self::Xss => "xss",
            Self::Dos => "dos",
            Self::Ssrf => "ssrf",
            Self::Csrf => "csrf",
            Self::HttpResponseSplitting => "http-response-splitting",
            Self::OpenRedirect => "open-redirect",
            Self::WeakCryptography => "weak-cryptography",
            Self::Auth => "auth",
            Self::InsecureConf => "insecure-conf",
            Self::FileManipulation => "file-manipulation",
            Self::EncryptionOfSensitiveData => "encrypt-data",
            Self::Traceability => "traceability",
            Self::Permission => "permission",
            Self::Others => "others",
        }
    }

    pub fn vulnerability(&self) -> VulnerabilityProbability {
        use VulnerabilityProbability::{High, Low, Medium};
        match self {
            Self::BufferOverflow
            | Self::SqlInjection
            | Self::CommandInjection
            | Self::PathTraversalInjection
            | Self::Xss
            | Self::Csrf
            | Self::Auth => High,
            Self::Rce
            | Self::Xxe
            | Self::Dos
            | Self::Ssrf
            | Self::OpenRedirect
            | Self::WeakCryptography
            | Self::Permission => Medium,
            Self::ObjectInjection
            | Self::LdapInjection
            | Self::XpathInjection
            | Self::LogInjection
            | Self::HttpResponseSplitting
            | Self::InsecureConf
            | Self::FileManipulation
            | Self::EncryptionOfSensitiveData
            | Self::Traceability
            | Self::Others => Low,
        }
    }

    /// Position in [`CATEGORY_PRIORITY`]; lower wins a tie-break.
    pub fn priority(&self) -> usize {
        CATEGORY_PRIORITY
            .iter()
            .position(|c| c == self)
            .unwrap_or(CATEGORY_PRIORITY.len())
    }

    pub fn all() -> &'static [SqCategory] {
        &CATEGORY_PRIORITY
    }

    pub fn from_key(key: &str) -> Option<Self> {
        StandardsRegistry::global().category_by_key(key)
    }
}

impl PartialOrd for SqCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SqCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl fmt::Display for SqCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SqCategory {
    type Err = StandardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| StandardsError::UnknownCategory(s.to_string()))
    }
}

/// Order category *keys* by tie-break priority, for collaborators sorting
/// facet values. Unknown keys sort after every known key, then by text.
pub fn compare_category_keys(a: &str, b: &str) -> Ordering {
    let rank = |k: &str| SqCategory::from_key(k).map(|c| c.priority());
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
