//! Configuration system for reqtree.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod display_config;
pub mod engine_config;
pub mod reqtree_config;

pub use display_config::DisplayConfig;
pub use engine_config::{EngineConfig, UnknownPolicy};
pub use reqtree_config::{parse_env_value, ConfigOverrides, ReqtreeConfig};
