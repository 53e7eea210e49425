//! Configuration system for the E20 simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline values matching the reference machine (PC 0, 128-word dump).
//! 2. **Structures:** Hierarchical config for general execution and final reporting.
//! 3. **Parsing:** JSON deserialization with validation.
//!
//! The CLI uses `Config::default()`. Embedders may supply a JSON document.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_DISPLAY_WORDS, MEM_SIZE};
use crate::common::error::ConfigError;

/// Root configuration.
///
/// # Example
///
/// ```
/// use e20sim_core::config::Config;
///
/// let json = r#"{ "general": { "trace_instructions": true }, "report": { "display_words": 16 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.report.display_words, 16);
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Execution settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Final state report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::DisplayWindow`] if the report window exceeds memory.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DisplayWindow`] if the report window exceeds memory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.display_words > MEM_SIZE {
            return Err(ConfigError::DisplayWindow {
                requested: self.report.display_words,
                limit: MEM_SIZE,
            });
        }
        Ok(())
    }
}

/// General execution settings.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
    /// Program counter at reset.
    #[serde(default)]
    pub start_pc: u16,
}

/// Final state report settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Number of memory words, from address 0, included in the dump.
    #[serde(default = "ReportConfig::default_display_words")]
    pub display_words: usize,
}

impl ReportConfig {
    const fn default_display_words() -> usize {
        DEFAULT_DISPLAY_WORDS
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            display_words: DEFAULT_DISPLAY_WORDS,
        }
    }
}
