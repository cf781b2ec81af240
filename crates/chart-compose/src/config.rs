// File: crates/chart-compose/src/config.rs
// Summary: Engine configuration (rendering hint names and size limits), loaded once at startup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::hints::RenderingHintSet;

/// Largest accepted `max_width`/`max_height`; keeps graph geometry inside `i32`.
pub const MAX_DIMENSION: u32 = 1 << 16;

/// Upper bounds applied to every render. Requests above them are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_width: u32,
    pub max_height: u32,
    pub max_zoom: f64,
    pub max_lines_in_legend: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_width: 2000,
            max_height: 1000,
            max_zoom: 2.0,
            max_lines_in_legend: 50,
        }
    }
}

impl Limits {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_width == 0 || self.max_width > MAX_DIMENSION {
            return Err(invalid("max_width", self.max_width));
        }
        if self.max_height == 0 || self.max_height > MAX_DIMENSION {
            return Err(invalid("max_height", self.max_height));
        }
        if !self.max_zoom.is_finite() || self.max_zoom <= 0.0 {
            return Err(invalid("max_zoom", self.max_zoom));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidLimit { name, value: value.to_string() }
}

/// Everything the engine reads at construction.
///
/// ```json
/// {
///   "rendering_hints": { "antialiasing": "on", "font-hinting": "slight" },
///   "max_width": 2000,
///   "max_zoom": 2.0
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub rendering_hints: BTreeMap<String, String>,

    #[serde(flatten)]
    pub limits: Limits,
}

impl EngineConfig {
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn with_hint(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.rendering_hints.insert(key.into(), value.into());
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Resolve the hint names against the fixed enumeration.
    pub fn hint_set(&self) -> ConfigResult<RenderingHintSet> {
        RenderingHintSet::from_names(
            self.rendering_hints.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }
}
