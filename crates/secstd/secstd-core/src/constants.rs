//! Shared constants for the secstd classifier.

/// secstd version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Batch size at which batch classification fans out over the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Project-level config file name, resolved against a project root.
pub const PROJECT_CONFIG_FILE: &str = "secstd.toml";

/// User-level config directory name, resolved against the home directory.
pub const USER_CONFIG_DIR: &str = ".secstd";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "SECSTD_LOG";

/// Fallback tracing filter when `SECSTD_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "secstd=info";
