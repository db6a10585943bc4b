//! Configuration types for the test harness.

use crate::error::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Name of the configuration file inside a project directory.
const CONFIG_FILE: &str = "cadence.toml";

/// Harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HarnessConfig {
    /// Suite-related configuration.
    #[serde(default)]
    pub suite: SuiteConfig,

    /// Timeout configuration for the external watchdog.
    #[serde(default)]
    pub timeout: TimeoutConfig,
}

impl HarnessConfig {
    /// Load configuration from `cadence.toml` in the given directory.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| HarnessError::Config(format!("failed to read config: {}", e)))?;
            toml::from_str(&content)
                .map_err(|e| HarnessError::Config(format!("failed to parse config: {}", e)))
        } else {
            Ok(HarnessConfig::default())
        }
    }

    /// Save configuration to `cadence.toml` in the given directory.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| HarnessError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&path, content)
            .map_err(|e| HarnessError::Config(format!("failed to write config: {}", e)))?;
        Ok(())
    }
}

/// Suite configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Name reported in the begin-suite event.
    #[serde(default = "default_suite_name")]
    pub name: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            name: default_suite_name(),
        }
    }
}

fn default_suite_name() -> String {
    "TestRunner".to_string()
}

/// Timeout configuration.
///
/// The harness itself has no notion of elapsed time; this budget is exposed
/// through [`crate::TestRunner::default_timeout`] for an external watchdog
/// that calls [`crate::TestSuite::force_timeout`] on a hung case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Per-case timeout budget in milliseconds.
    #[serde(default = "default_case_timeout_ms")]
    pub default_case_timeout_ms: u64,
}

impl TimeoutConfig {
    /// The configured budget as a [`Duration`].
    pub fn default_case_timeout(&self) -> Duration {
        Duration::from_millis(self.default_case_timeout_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            default_case_timeout_ms: default_case_timeout_ms(),
        }
    }
}

fn default_case_timeout_ms() -> u64 {
    2000
}
