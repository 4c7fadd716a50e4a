//! Load-time policy

use serde::{Deserialize, Serialize};

/// Configuration for loading attribute lists and media sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Stop at the first recorded structural error instead of skipping the
    /// offending line
    pub escalate_errors: bool,
    /// Keep attributes with unrecognized names as generic attributes
    pub keep_unknown_attributes: bool,
    /// Longest accepted line in bytes, line ending excluded
    pub max_line_length: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            escalate_errors: false,
            keep_unknown_attributes: true,
            max_line_length: 4096,
        }
    }
}

impl LoadConfig {
    /// Lenient defaults, but loading stops at the first error
    pub fn strict() -> Self {
        Self {
            escalate_errors: true,
            ..Self::default()
        }
    }
}
