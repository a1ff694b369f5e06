//! On-disk evaluation parameters.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::posture::{KneeAggregation, PostureEvaluator};

/// Tunable evaluation parameters, stored as a TOML file.
///
/// Missing fields fall back to their defaults, so a config file only needs to name the
/// parameters it overrides. The defaults match [`PostureEvaluator::new`]; deployments
/// that need per-exercise calibration adjust them here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Knee angle threshold in degrees. Aggregated angles below this classify as a
    /// bent-knee lift.
    pub knee_threshold_deg: f32,
    /// How the two per-leg knee angles are combined.
    pub knee_aggregation: KneeAggregation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            knee_threshold_deg: PostureEvaluator::DEFAULT_THRESHOLD,
            knee_aggregation: KneeAggregation::default(),
        }
    }
}

impl Config {
    /// Loads a config from a TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if !config.knee_threshold_deg.is_finite() {
            anyhow::bail!("knee_threshold_deg must be finite");
        }
        Ok(config)
    }

    /// Saves the config as pretty-printed TOML to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Builds a [`PostureEvaluator`] configured with these parameters.
    pub fn evaluator(&self) -> PostureEvaluator {
        let mut evaluator = PostureEvaluator::new();
        evaluator.set_threshold(self.knee_threshold_deg);
        evaluator.set_aggregation(self.knee_aggregation);
        evaluator
    }
}
