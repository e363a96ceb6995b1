//! # reqtree-core
//!
//! Shared foundation for the reqtree criteria engine:
//! - `errors`: one `thiserror` enum per concern, structured error codes
//! - `config`: TOML configuration with layered resolution
//! - `tracing`: subscriber setup
//! - `types`: attribute identifiers and fast collections
//! - `traits`: the attribute-map and naming-service seams

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::{DisplayConfig, EngineConfig, ReqtreeConfig, UnknownPolicy};
pub use errors::{ConfigError, CriteriaError, MalformedCriteriaError};
pub use traits::{AttributeNames, AttributeSource, NoNames};
pub use types::{AttributeId, AttributeMap, AttributeValue, CriterionId};
