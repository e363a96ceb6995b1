//! Top-level reqtree configuration with layered resolution.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DisplayConfig, EngineConfig, UnknownPolicy};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`REQTREE_*`)
/// 3. Project config (`reqtree.toml` in the project root)
/// 4. User config (`~/.reqtree/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReqtreeConfig {
    pub engine: EngineConfig,
    pub display: DisplayConfig,
}

/// Caller-supplied overrides, e.g. from a planner's settings screen.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub unknown_policy: Option<UnknownPolicy>,
    pub warn_on_unbound_modifier: Option<bool>,
    pub parallel_threshold: Option<usize>,
    pub max_depth: Option<usize>,
    pub target_prefix: Option<String>,
}

impl ReqtreeConfig {
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
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ReqtreeConfig) -> Result<(), ConfigError> {
        if config.engine.parallel_threshold == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.engine.max_depth == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref label) = config.display.fallback_attribute_label {
            if label.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "display.fallback_attribute_label".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.reqtree/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".reqtree").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut ReqtreeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ReqtreeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut ReqtreeConfig, other: &ReqtreeConfig) {
        if other.engine.unknown_policy.is_some() {
            base.engine.unknown_policy = other.engine.unknown_policy;
        }
        if other.engine.warn_on_unbound_modifier.is_some() {
            base.engine.warn_on_unbound_modifier = other.engine.warn_on_unbound_modifier;
        }
        if other.engine.parallel_threshold.is_some() {
            base.engine.parallel_threshold = other.engine.parallel_threshold;
        }
        if other.engine.max_depth.is_some() {
            base.engine.max_depth = other.engine.max_depth;
        }

        if other.display.target_prefix.is_some() {
            base.display.target_prefix = other.display.target_prefix.clone();
        }
        if other.display.fallback_attribute_label.is_some() {
            base.display.fallback_attribute_label = other.display.fallback_attribute_label.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are logged and skipped.
    fn apply_env_overrides(config: &mut ReqtreeConfig) {
        if let Some(v) = env_value::<UnknownPolicy>("REQTREE_UNKNOWN_POLICY", "engine.unknown_policy") {
            config.engine.unknown_policy = Some(v);
        }
        if let Some(v) = env_value::<bool>(
            "REQTREE_WARN_ON_UNBOUND_MODIFIER",
            "engine.warn_on_unbound_modifier",
        ) {
            config.engine.warn_on_unbound_modifier = Some(v);
        }
        if let Some(v) = env_value::<usize>("REQTREE_PARALLEL_THRESHOLD", "engine.parallel_threshold") {
            config.engine.parallel_threshold = Some(v);
        }
        if let Some(v) = env_value::<usize>("REQTREE_MAX_DEPTH", "engine.max_depth") {
            config.engine.max_depth = Some(v);
        }
        if let Ok(val) = std::env::var("REQTREE_TARGET_PREFIX") {
            config.display.target_prefix = Some(val);
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut ReqtreeConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.unknown_policy {
            config.engine.unknown_policy = Some(v);
        }
        if let Some(v) = overrides.warn_on_unbound_modifier {
            config.engine.warn_on_unbound_modifier = Some(v);
        }
        if let Some(v) = overrides.parallel_threshold {
            config.engine.parallel_threshold = Some(v);
        }
        if let Some(v) = overrides.max_depth {
            config.engine.max_depth = Some(v);
        }
        if let Some(ref v) = overrides.target_prefix {
            config.display.target_prefix = Some(v.clone());
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

/// Parse the environment variable `key` for config `field`.
///
/// An unset variable is `Ok(None)`; a value that does not parse is an
/// `InvalidValue` error.
pub fn parse_env_value<T>(key: &str, field: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("{key}={val:?}: {e}"),
            }),
        Err(_) => Ok(None),
    }
}

/// Like `parse_env_value`, but a bad value is logged and skipped.
fn env_value<T>(key: &str, field: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match parse_env_value(key, field) {
        Ok(v) => v,
        Err(e) => {
            ::tracing::warn!(error = %e, "ignoring environment override");
            None
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
