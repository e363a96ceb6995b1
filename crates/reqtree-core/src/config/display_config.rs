//! Display configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FALLBACK_ATTRIBUTE_LABEL, DEFAULT_TARGET_PREFIX};

/// Configuration for requirement descriptions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix for target-scoped requirement descriptions. Default: "Target: ".
    pub target_prefix: Option<String>,
    /// Label for attributes without a display name. Default: "Attribute".
    pub fallback_attribute_label: Option<String>,
}

impl DisplayConfig {
    pub fn effective_target_prefix(&self) -> &str {
        self.target_prefix.as_deref().unwrap_or(DEFAULT_TARGET_PREFIX)
    }

    pub fn effective_fallback_attribute_label(&self) -> &str {
        self.fallback_attribute_label
            .as_deref()
            .unwrap_or(DEFAULT_FALLBACK_ATTRIBUTE_LABEL)
    }
}
