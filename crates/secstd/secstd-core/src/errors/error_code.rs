//! SecStdErrorCode trait for structured error codes at API boundaries.

/// Every error enum implements this to provide a stable, machine-readable
/// code string for collaborators that render errors into API responses.
pub trait SecStdErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn display_code(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STANDARDS_ERROR: &str = "STANDARDS_ERROR";
