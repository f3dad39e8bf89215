//! Evaluator configuration.

use serde::{Deserialize, Serialize};

/// Default cap on captured `print` lines per evaluation.
pub const DEFAULT_LOG_LIMIT: usize = 1000;

/// Evaluator options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Maximum number of `print` lines kept in the evaluator's log output.
    /// Lines past the cap still reach the `log` facade and are counted.
    pub log_limit: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}
