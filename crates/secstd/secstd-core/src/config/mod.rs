//! Configuration system for secstd.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod classification_config;
pub mod report_config;
pub mod secstd_config;

pub use classification_config::ClassificationConfig;
pub use report_config::ReportConfig;
pub use secstd_config::{ConfigOverrides, SecStdConfig};
