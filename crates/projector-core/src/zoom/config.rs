use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{
    DEFAULT_INITIAL_ZOOM, DEFAULT_LOAD_THRESHOLD, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM,
    DEFAULT_WHEEL_SENSITIVITY,
};
use crate::error::{ProjectorError, Result};

/// Zoom limits and wheel behaviour for one image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Level applied when a source set is shown.
    #[serde(default = "default_initial")]
    pub initial: f64,
    #[serde(default = "default_min")]
    pub min: f64,
    #[serde(default = "default_max")]
    pub max: f64,
    /// Zooming in past this level requests the full-resolution source.
    #[serde(default = "default_load_threshold")]
    pub load_threshold: f64,
    /// Base increment per wheel notch; multiplied by `max(1, floor(level))`.
    #[serde(default = "default_wheel_sensitivity")]
    pub wheel_sensitivity: f64,
}

fn default_initial() -> f64 {
    DEFAULT_INITIAL_ZOOM
}
fn default_min() -> f64 {
    DEFAULT_MIN_ZOOM
}
fn default_max() -> f64 {
    DEFAULT_MAX_ZOOM
}
fn default_load_threshold() -> f64 {
    DEFAULT_LOAD_THRESHOLD
}
fn default_wheel_sensitivity() -> f64 {
    DEFAULT_WHEEL_SENSITIVITY
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL_ZOOM,
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
        }
    }
}

impl ZoomConfig {
    /// Check the invariants `0 < min <= initial <= max` and `wheel_sensitivity > 0`.
    ///
    /// A load threshold outside `[min, max]` is accepted with a warning: below
    /// `min` the first zoom-in step loads the full source, above `max` it never loads.
    pub fn validated(&self) -> Result<ZoomConfig> {
        let fields = [
            ("initial", self.initial),
            ("min", self.min),
            ("max", self.max),
            ("load_threshold", self.load_threshold),
            ("wheel_sensitivity", self.wheel_sensitivity),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ProjectorError::InvalidZoomConfig(format!(
                "{name} must be finite (got {value})"
            )));
        }

        if self.min <= 0.0 {
            return Err(ProjectorError::InvalidZoomConfig(format!(
                "min must be > 0 (got {})",
                self.min
            )));
        }
        if self.min > self.max {
            return Err(ProjectorError::InvalidZoomConfig(format!(
                "min ({}) exceeds max ({})",
                self.min, self.max
            )));
        }
        if self.initial < self.min || self.initial > self.max {
            return Err(ProjectorError::InvalidZoomConfig(format!(
                "initial ({}) outside [{}, {}]",
                self.initial, self.min, self.max
            )));
        }
        if self.wheel_sensitivity <= 0.0 {
            return Err(ProjectorError::InvalidZoomConfig(format!(
                "wheel_sensitivity must be > 0 (got {})",
                self.wheel_sensitivity
            )));
        }

        if self.load_threshold < self.min || self.load_threshold > self.max {
            warn!(
                load_threshold = self.load_threshold,
                min = self.min,
                max = self.max,
                "Load threshold outside zoom range"
            );
        }

        Ok(self.clone())
    }

    /// Clamp a level into `[min, max]`.
    pub fn clamp(&self, level: f64) -> f64 {
        level.max(self.min).min(self.max)
    }
}
