//! Evaluation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_PARALLEL_THRESHOLD};

/// How an `Unknown` status (NOT over a partial or unknown child) is treated
/// when deciding satisfiability and listing unmet requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    /// Unknown counts as unmet and is listed among the unmet requirements.
    #[default]
    Conservative,
    /// Unknown counts as met and is not listed.
    Permissive,
}

impl UnknownPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Permissive => "permissive",
        }
    }

    /// Whether an unknown outcome should be treated as satisfied.
    pub fn unknown_is_met(&self) -> bool {
        matches!(self, Self::Permissive)
    }
}

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnknownPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "permissive" => Ok(Self::Permissive),
            other => Err(format!("unknown policy '{other}'")),
        }
    }
}

/// Configuration for the evaluation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Treatment of unknown statuses. Default: conservative.
    pub unknown_policy: Option<UnknownPolicy>,
    /// Log dropped trailing modifiers at warn level instead of debug. Default: false.
    pub warn_on_unbound_modifier: Option<bool>,
    /// Batch size at which lists are evaluated in parallel. Default: 64.
    pub parallel_threshold: Option<usize>,
    /// Deepest expression nesting accepted when building a tree. Default: 256.
    pub max_depth: Option<usize>,
}

impl EngineConfig {
    /// Returns the effective unknown policy, defaulting to conservative.
    pub fn effective_unknown_policy(&self) -> UnknownPolicy {
        self.unknown_policy.unwrap_or_default()
    }

    pub fn effective_warn_on_unbound_modifier(&self) -> bool {
        self.warn_on_unbound_modifier.unwrap_or(false)
    }

    /// Returns the effective parallel threshold, defaulting to 64.
    pub fn effective_parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
    }

    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}
