//! secstd-core: errors, configuration, tracing, and
//! constants for the secstd security-standards classifier.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
