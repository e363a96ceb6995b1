//! Error handling for reqtree.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod criteria_error;
pub mod error_code;
pub mod malformed_error;

pub use config_error::ConfigError;
pub use criteria_error::CriteriaError;
pub use error_code::ReqtreeErrorCode;
pub use malformed_error::MalformedCriteriaError;
