use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_REWRITE_INTERVAL_MS;
use crate::error::Result;
use crate::zoom::ZoomConfig;

/// Complete inspector configuration, as stored in a TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectorConfig {
    #[serde(default)]
    pub zoom: ZoomConfig,
    /// Minimum interval between admitted pointer moves (0 disables throttling).
    #[serde(default = "default_rewrite_interval_ms")]
    pub rewrite_interval_ms: u64,
}

fn default_rewrite_interval_ms() -> u64 {
    DEFAULT_REWRITE_INTERVAL_MS
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            rewrite_interval_ms: DEFAULT_REWRITE_INTERVAL_MS,
        }
    }
}

impl InspectorConfig {
    pub fn validated(&self) -> Result<InspectorConfig> {
        Ok(Self {
            zoom: self.zoom.validated()?,
            rewrite_interval_ms: self.rewrite_interval_ms,
        })
    }

    pub fn rewrite_interval(&self) -> Duration {
        Duration::from_millis(self.rewrite_interval_ms)
    }
}
