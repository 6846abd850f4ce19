//! Top-level secstd configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ClassificationConfig, ReportConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`SECSTD_*`)
/// 3. Project config (`secstd.toml` in project root)
/// 4. User config (`~/.secstd/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SecStdConfig {
    pub classification: ClassificationConfig,
    pub report: ReportConfig,
}

/// Override values supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub parallel_threshold: Option<usize>,
    pub log_ignored_categories: Option<bool>,
    pub top25_years: Option<Vec<String>>,
    pub include_sans_top25: Option<bool>,
    pub include_others: Option<bool>,
}

impl SecStdConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        tracing::debug!(
            parallel_threshold = config.classification.effective_parallel_threshold(),
            include_sans_top25 = config.report.effective_include_sans_top25(),
            "secstd config resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SecStdConfig) -> Result<(), ConfigError> {
        if config.classification.parallel_threshold == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "classification.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(year) = config.report.top25_years.iter().find(|y| y.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "report.top25_years".to_string(),
                message: format!("blank year entry {year:?}"),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.secstd/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SecStdConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SecStdConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut SecStdConfig, other: &SecStdConfig) {
        if other.classification.parallel_threshold.is_some() {
            base.classification.parallel_threshold = other.classification.parallel_threshold;
        }
        if other.classification.log_ignored_categories.is_some() {
            base.classification.log_ignored_categories =
                other.classification.log_ignored_categories;
        }

        if !other.report.top25_years.is_empty() {
            base.report.top25_years = other.report.top25_years.clone();
        }
        if other.report.include_sans_top25.is_some() {
            base.report.include_sans_top25 = other.report.include_sans_top25;
        }
        if other.report.include_others.is_some() {
            base.report.include_others = other.report.include_others;
        }
    }

    /// Apply environment variable overrides. Unparseable values are skipped.
    fn apply_env_overrides(config: &mut SecStdConfig) {
        if let Ok(val) = std::env::var("SECSTD_PARALLEL_THRESHOLD") {
            if let Ok(v) = val.parse::<usize>() {
                config.classification.parallel_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SECSTD_LOG_IGNORED_CATEGORIES") {
            if let Ok(v) = val.parse::<bool>() {
                config.classification.log_ignored_categories = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SECSTD_REPORT_INCLUDE_SANS_TOP25") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.include_sans_top25 = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SECSTD_REPORT_INCLUDE_OTHERS") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.include_others = Some(v);
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut SecStdConfig, o: &ConfigOverrides) {
        if let Some(v) = o.parallel_threshold {
            config.classification.parallel_threshold = Some(v);
        }
        if let Some(v) = o.log_ignored_categories {
            config.classification.log_ignored_categories = Some(v);
        }
        if let Some(ref v) = o.top25_years {
            config.report.top25_years = v.clone();
        }
        if let Some(v) = o.include_sans_top25 {
            config.report.include_sans_top25 = Some(v);
        }
        if let Some(v) = o.include_others {
            config.report.include_others = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
