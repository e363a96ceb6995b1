//! Shared constants for the reqtree criteria engine.

/// Description prefix applied to leaves bound by a target scope modifier.
pub const DEFAULT_TARGET_PREFIX: &str = "Target: ";

/// Label used for attributes the naming service does not know.
pub const DEFAULT_FALLBACK_ATTRIBUTE_LABEL: &str = "Attribute";

/// Batch size at which criteria lists are evaluated in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Deepest expression nesting the tree builder accepts.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "reqtree.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "REQTREE_LOG";
