//! Error handling for secstd.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod standards_error;

pub use config_error::ConfigError;
pub use error_code::SecStdErrorCode;
pub use standards_error::StandardsError;
