/// Zoom level applied when a new source set is shown.
pub const DEFAULT_INITIAL_ZOOM: f64 = 1.0;

/// Lowest zoom level reachable with the wheel.
pub const DEFAULT_MIN_ZOOM: f64 = 1.0;

/// Highest zoom level reachable with the wheel.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;

/// Zoom level above which the full-resolution source is requested.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 2.0;

/// Base zoom increment per wheel notch (scaled by the integer part of the level).
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 0.1;

/// Minimum interval between two admitted pointer moves, in milliseconds.
pub const DEFAULT_REWRITE_INTERVAL_MS: u64 = 50;

/// Zoom levels are snapped to 1 / LEVEL_ROUNDING_SCALE after every wheel step.
pub const LEVEL_ROUNDING_SCALE: f64 = 100.0;

/// Opacity of the dimming mask drawn around the active area.
pub const MASK_OPACITY: f32 = 0.5;
