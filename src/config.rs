//! Scanner configuration
//!
//! The scanner carries no file-backed configuration; callers construct a
//! [`ScannerConfig`] (usually `Default`) and hand it to `QrScanner::new`.

use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimum interval between two accepted scans, in milliseconds
const DEFAULT_COOLDOWN_MS: u64 = 2000;

/// Configuration for a scanning session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Cooldown between accepted scans; suppresses re-triggers from a
    /// continuously-reading camera feed pointed at the same code
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

impl ScannerConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.cooldown_ms == 0 {
            return Err(ScanError::InvalidConfigValue {
                field: "cooldown_ms".to_string(),
                message: "cooldown must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Cooldown as a [`Duration`]
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}
