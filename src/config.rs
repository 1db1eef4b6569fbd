//! Grading session configuration.

use crate::grading::ComplexityLevel;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_TOTAL_POINTS: f64 = 30.0;

/// Total points and number of levels, chosen once per session.
///
/// Stored on disk as JSON:
/// ```json
/// { "total_points": 30, "levels": 3 }
/// ```
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub total_points: f64,
    pub levels: ComplexityLevel,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            total_points: DEFAULT_TOTAL_POINTS,
            levels: ComplexityLevel::default(),
        }
    }
}

impl GradingConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{path}'"))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file '{path}'"))?;
        debug!(path, ?config, "Config file loaded");
        Ok(config)
    }

    /// Builds a config from `GRADE_TOTAL_POINTS` and `GRADE_LEVELS`, using
    /// defaults for whichever is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("GRADE_TOTAL_POINTS") {
            config.total_points = raw
                .trim()
                .parse()
                .with_context(|| format!("GRADE_TOTAL_POINTS is not a number: '{raw}'"))?;
        }
        if let Some(raw) = lookup("GRADE_LEVELS") {
            config.levels = raw.parse().context("GRADE_LEVELS is invalid")?;
        }

        Ok(config)
    }

    /// Applies command-line overrides on top of this config.
    pub fn with_overrides(mut self, total_points: Option<f64>, levels: Option<ComplexityLevel>) -> Self {
        if let Some(total) = total_points {
            self.total_points = total;
        }
        if let Some(levels) = levels {
            self.levels = levels;
        }
        self
    }

    /// Rejects totals that cannot be used as a denominator.
    pub fn validate(self) -> Result<Self> {
        if !self.total_points.is_finite() || self.total_points <= 0.0 {
            bail!("total points must be a positive number, got {}", self.total_points);
        }
        Ok(self)
    }
}
