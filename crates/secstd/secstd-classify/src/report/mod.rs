//! Aggregate report over many classified findings.

pub mod aggregate;
pub mod types;

pub use aggregate::generate_report;
pub use types::*;
