//! External taxonomy prefixes and their fixed identifier sets.

use serde::{Deserialize, Serialize};

/// Substituted CWE identifier when a finding carries no `cwe:` tag.
pub const UNKNOWN_STANDARD: &str = "unknown";

pub const CWE_PREFIX: &str = "cwe:";
pub const OWASP_TOP10_PREFIX: &str = "owaspTop10:";
pub const OWASP_TOP10_2021_PREFIX: &str = "owaspTop10-2021:";

/// PCI DSS versions carried as tag prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PciDssVersion {
    #[serde(rename = "3.2")]
    V3_2,
    #[serde(rename = "4.0")]
    V4_0,
}

impl PciDssVersion {
    pub fn label(&self) -> &'static str {
        match self {
            Self::V3_2 => "3.2",
            Self::V4_0 => "4.0",
        }
    }

    /// Taxonomy name without the `:` separator, e.g. `pciDss-3.2`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::V3_2 => "pciDss-3.2",
            Self::V4_0 => "pciDss-4.0",
        }
    }

    /// Full tag prefix including the separator, e.g. `pciDss-3.2:`.
    pub fn tag_prefix(&self) -> &'static str {
        match self {
            Self::V3_2 => "pciDss-3.2:",
            Self::V4_0 => "pciDss-4.0:",
        }
    }
}

/// OWASP ASVS versions carried as tag prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwaspAsvsVersion {
    #[serde(rename = "4.0")]
    V4_0,
}

impl OwaspAsvsVersion {
    pub fn label(&self) -> &'static str {
        match self {
            Self::V4_0 => "4.0",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Self::V4_0 => "owaspAsvs-4.0",
        }
    }

    pub fn tag_prefix(&self) -> &'static str {
        match self {
            Self::V4_0 => "owaspAsvs-4.0:",
        }
    }
}

/// Top-level PCI DSS requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PciDss {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
}

impl PciDss {
    pub fn all() -> &'static [PciDss] {
        use PciDss::*;
        &[R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11, R12]
    }

    /// Requirement number as it appears in tags, e.g. `"6"`.
    pub fn category(&self) -> &'static str {
        match self {
            Self::R1 => "1",
            Self::R2 => "2",
            Self::R3 => "3",
            Self::R4 => "4",
            Self::R5 => "5",
            Self::R6 => "6",
            Self::R7 => "7",
            Self::R8 => "8",
            Self::R9 => "9",
            Self::R10 => "10",
            Self::R11 => "11",
            Self::R12 => "12",
        }
    }
}

/// Top-level OWASP ASVS chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwaspAsvs {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C8,
    C9,
    C10,
    C11,
    C12,
    C13,
    C14,
}

impl OwaspAsvs {
    pub fn all() -> &'static [OwaspAsvs] {
        use OwaspAsvs::*;
        &[C1, C2, C3, C4, C5, C6, C7, C8, C9, C10, C11, C12, C13, C14]
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::C1 => "1",
            Self::C2 => "2",
            Self::C3 => "3",
            Self::C4 => "4",
            Self::C5 => "5",
            Self::C6 => "6",
            Self::C7 => "7",
            Self::C8 => "8",
            Self::C9 => "9",
            Self::C10 => "10",
            Self::C11 => "11",
            Self::C12 => "12",
            Self::C13 => "13",
            Self::C14 => "14",
        }
    }
}
