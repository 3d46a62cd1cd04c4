//! Game configuration
//!
//! Every tunable of the game loop as one serializable value. Missing fields
//! in a config file fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    // === Round ===
    /// Round length in seconds
    pub session_duration_seconds: u32,
    /// Balloon cap
    pub max_live_objects: usize,

    // === Timers ===
    pub tick_interval_ms: u32,
    pub spawn_interval_ms: u32,
    pub motion_interval_ms: u32,

    // === Balloons ===
    /// Minimum rise per motion tick (inclusive)
    pub min_speed: f32,
    /// Maximum rise per motion tick (exclusive)
    pub max_speed: f32,
    pub object_size: f32,
    /// A balloon whose y drops below this has escaped
    pub exit_y: f32,

    // === Play field ===
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            session_duration_seconds: SESSION_DURATION_SECONDS,
            max_live_objects: MAX_LIVE_OBJECTS,

            tick_interval_ms: TICK_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            motion_interval_ms: MOTION_INTERVAL_MS,

            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            object_size: OBJECT_SIZE,
            exit_y: EXIT_Y,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Default config sized to the given play field
    pub fn with_screen(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the game loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_duration_seconds == 0 {
            return Err(ConfigError::invalid("sessionDurationSeconds", "must be at least 1"));
        }
        if self.max_live_objects == 0 {
            return Err(ConfigError::invalid("maxLiveObjects", "must be at least 1"));
        }
        for (field, value) in [
            ("tickIntervalMs", self.tick_interval_ms),
            ("spawnIntervalMs", self.spawn_interval_ms),
            ("motionIntervalMs", self.motion_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::invalid(field, "timer interval must be non-zero"));
            }
        }
        if !(self.min_speed.is_finite() && self.min_speed > 0.0) {
            return Err(ConfigError::invalid("minSpeed", "must be a positive number"));
        }
        if !(self.max_speed.is_finite() && self.max_speed > self.min_speed) {
            return Err(ConfigError::invalid(
                "maxSpeed",
                format!("must be greater than minSpeed ({})", self.min_speed),
            ));
        }
        if !(self.object_size.is_finite() && self.object_size > 0.0) {
            return Err(ConfigError::invalid("objectSize", "must be a positive number"));
        }
        if !self.exit_y.is_finite() {
            return Err(ConfigError::invalid("exitY", "must be finite"));
        }
        if !(self.screen_width.is_finite() && self.screen_width > 0.0) {
            return Err(ConfigError::invalid("screenWidth", "must be a positive number"));
        }
        if !(self.screen_height.is_finite() && self.screen_height > 0.0) {
            return Err(ConfigError::invalid("screenHeight", "must be a positive number"));
        }
        Ok(())
    }
}
