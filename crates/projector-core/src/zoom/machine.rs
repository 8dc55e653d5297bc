use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::LEVEL_ROUNDING_SCALE;
use crate::source::{SourceKind, SourceSet};

use super::config::ZoomConfig;

/// Current zoom level plus the high-resolution latch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    /// Always within `[config.min, config.max]`.
    pub level: f64,
    /// Set once the full-resolution source has been requested; cleared only by a reset.
    pub high_res_loaded: bool,
    pub active_source: SourceKind,
}

impl ZoomState {
    fn initial(config: &ZoomConfig) -> Self {
        Self {
            level: config.clamp(config.initial),
            high_res_loaded: false,
            active_source: SourceKind::Thumb,
        }
    }
}

/// Result of a single wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelOutcome {
    pub previous: f64,
    pub level: f64,
    /// True exactly once per source set: the step that crossed the load threshold.
    pub load_full: bool,
}

impl WheelOutcome {
    pub fn changed(&self) -> bool {
        self.previous != self.level
    }
}

/// Wheel-driven zoom level state machine with the one-shot full-source latch.
#[derive(Clone, Debug)]
pub struct ZoomMachine {
    config: ZoomConfig,
    state: ZoomState,
    full_available: bool,
}

impl ZoomMachine {
    pub fn new(config: ZoomConfig) -> Self {
        let state = ZoomState::initial(&config);
        Self {
            config,
            state,
            full_available: false,
        }
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    pub fn level(&self) -> f64 {
        self.state.level
    }

    /// Replace the config. The level is reset to the new initial value, clamped
    /// into the new range; the latch is kept since the source set did not change.
    pub fn set_config(&mut self, config: ZoomConfig) {
        self.state.level = config.clamp(config.initial);
        self.config = config;
    }

    /// Advance on a wheel delta. Positive `delta_y` zooms out, negative zooms in,
    /// zero (or NaN) is ignored.
    pub fn on_wheel(&mut self, delta_y: f64) -> WheelOutcome {
        let previous = self.state.level;
        let mut load_full = false;

        if delta_y > 0.0 {
            self.state.level = self.zoom_out_level(previous);
        } else if delta_y < 0.0 {
            self.state.level = self.zoom_in_level(previous);
            load_full = self.try_latch_full();
        }

        if previous != self.state.level {
            debug!(from = previous, to = self.state.level, "Zoom level changed");
        }

        WheelOutcome {
            previous,
            level: self.state.level,
            load_full,
        }
    }

    /// Hard reset on a new image identity, discarding any in-progress zoom.
    pub fn on_source_changed(&mut self, sources: &SourceSet) {
        self.state = ZoomState::initial(&self.config);
        self.full_available = sources.has_full();
        debug!(
            thumb = %sources.thumb,
            full = sources.full.as_deref().unwrap_or("-"),
            level = self.state.level,
            "Zoom state reset"
        );
    }

    fn step(&self, level: f64) -> f64 {
        self.config.wheel_sensitivity * level.floor().max(1.0)
    }

    /// Two-candidate look-ahead: the second candidate uses the step size of the
    /// already-decremented level, so a shrinking step cannot overshoot.
    fn zoom_out_level(&self, level: f64) -> f64 {
        let next = level - self.step(level);
        let next_next = level - self.step(next);
        self.config
            .clamp(round2(self.config.min.max(next).max(next_next)))
    }

    fn zoom_in_level(&self, level: f64) -> f64 {
        self.config
            .clamp(round2(self.config.max.min(level + self.step(level))))
    }

    fn try_latch_full(&mut self) -> bool {
        if !self.full_available
            || self.state.high_res_loaded
            || self.state.level <= self.config.load_threshold
        {
            return false;
        }
        self.state.high_res_loaded = true;
        self.state.active_source = SourceKind::Full;
        info!(
            level = self.state.level,
            threshold = self.config.load_threshold,
            "Zoom crossed load threshold, requesting full-resolution source"
        );
        true
    }
}

/// Round to two decimal places.
pub fn round2(x: f64) -> f64 {
    (x * LEVEL_ROUNDING_SCALE).round() / LEVEL_ROUNDING_SCALE
}
