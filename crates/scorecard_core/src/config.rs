//! # Scoring Rules Configuration
//!
//! Policies for the two transitions whose behavior is not fixed by the rules
//! of the scorecard itself: what the manual out control does past three outs,
//! and what a home run does to the runners.
//!
//! ## Usage
//! ```rust
//! use scorecard_core::config::{CounterRules, OutPolicy};
//!
//! let observed = CounterRules::default();
//! assert_eq!(observed.manual_out, OutPolicy::Wrap);
//!
//! let strict = CounterRules::strict();
//! assert_eq!(strict.manual_out, OutPolicy::Saturate);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{Result, ScorecardError};
use crate::SCHEMA_VERSION;

/// What the manual out control does once outs already sit at three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutPolicy {
    /// 3 → 0
    #[default]
    Wrap,
    /// Stay at 3 until the half-inning is ended explicitly.
    Saturate,
}

/// What a home run does to the base state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeRunPolicy {
    #[default]
    NoOp,
    ClearBases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterRules {
    #[serde(default)]
    pub manual_out: OutPolicy,
    #[serde(default)]
    pub home_run: HomeRunPolicy,
}

impl CounterRules {
    /// Scorecard behavior as users know it (default)
    pub fn observed() -> Self {
        Self::default()
    }

    /// Outs cap at three everywhere; a home run empties the bases.
    pub fn strict() -> Self {
        Self { manual_out: OutPolicy::Saturate, home_run: HomeRunPolicy::ClearBases }
    }
}

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

/// Top-level config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorecardConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    #[serde(default)]
    pub rules: CounterRules,
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self { schema_version: SCHEMA_VERSION, rules: CounterRules::default() }
    }
}

impl ScorecardConfig {
    pub fn strict() -> Self {
        Self { rules: CounterRules::strict(), ..Self::default() }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(yaml)?;
        cfg.check_schema()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| ScorecardError::Config(format!("Invalid JSON config: {}", e)))?;
        cfg.check_schema()
    }

    /// Load from disk. `.json` files are parsed as JSON, everything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ScorecardError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let cfg = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            _ => Self::from_yaml_str(&text)?,
        };

        info!(
            path = %path.display(),
            manual_out = ?cfg.rules.manual_out,
            home_run = ?cfg.rules.home_run,
            "loaded scorecard config"
        );
        Ok(cfg)
    }

    fn check_schema(self) -> Result<Self> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ScorecardError::Config(format!(
                "Unsupported schema version: expected {}, found {}",
                SCHEMA_VERSION, self.schema_version
            )));
        }
        Ok(self)
    }
}
