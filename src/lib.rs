//! Balloon Pop - tap the balloons before they float away
//!
//! Core modules:
//! - `sim`: Deterministic simulation (session state, spawning, motion, taps, timers)
//! - `game`: Controller that owns a session, its RNG and its scheduler
//! - `settings`: Tunable game configuration
//! - `platform`: Browser bindings for a JS renderer

pub mod error;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::Game;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Round length in seconds
    pub const SESSION_DURATION_SECONDS: u32 = 30;
    /// Most balloons allowed on screen at once
    pub const MAX_LIVE_OBJECTS: usize = 8;

    /// Timer cadences (logical milliseconds)
    pub const TICK_INTERVAL_MS: u32 = 1000;
    pub const SPAWN_INTERVAL_MS: u32 = 2000;
    pub const MOTION_INTERVAL_MS: u32 = 50;
    /// Largest single clock step; longer frames are clamped (hidden tab, debugger)
    pub const MAX_FRAME_MS: u32 = 250;

    /// Balloon rise speed range (pixels per motion tick, max exclusive)
    pub const MIN_SPEED: f32 = 5.0;
    pub const MAX_SPEED: f32 = 10.0;
    /// Balloon edge length in pixels
    pub const OBJECT_SIZE: f32 = 60.0;
    /// Balloons above this y are gone
    pub const EXIT_Y: f32 = -50.0;

    /// Default play field (portrait phone)
    pub const SCREEN_WIDTH: f32 = 390.0;
    pub const SCREEN_HEIGHT: f32 = 844.0;
}
