//! secstd-classify: resolves a finding's security-standard tags (CWE, OWASP
//! Top 10, PCI DSS, OWASP ASVS) into normalized identifier sets, one primary
//! vulnerability category and the categories it suppressed.

pub mod batch;
pub mod report;
pub mod standards;

pub use batch::classify_batch;
pub use report::{generate_report, StandardsReport};
pub use standards::{SecurityStandards, SqCategory, VulnerabilityProbability};
