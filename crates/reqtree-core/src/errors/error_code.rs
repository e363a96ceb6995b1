//! ReqtreeErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// that filtering pipelines can log or group by.
pub trait ReqtreeErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_CRITERIA").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MALFORMED_CRITERIA: &str = "MALFORMED_CRITERIA";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
