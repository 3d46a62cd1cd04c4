//! Balloon generation
//!
//! All randomness is drawn from the caller's RNG so a seeded run replays
//! exactly.

use glam::Vec2;
use rand::Rng;

use super::state::{Balloon, BalloonColor, BalloonPattern, BalloonShape};
use crate::settings::GameConfig;

/// Roll a fresh balloon just below the bottom edge
pub fn generate_balloon<R: Rng + ?Sized>(id: u32, config: &GameConfig, rng: &mut R) -> Balloon {
    let color = BalloonColor::ALL[rng.random_range(0..BalloonColor::ALL.len())];
    let shape = BalloonShape::ALL[rng.random_range(0..BalloonShape::ALL.len())];
    let pattern = BalloonPattern::ALL[rng.random_range(0..BalloonPattern::ALL.len())];

    let size = config.object_size;
    // Screens narrower than a balloon pin it to the left edge
    let x_span = config.screen_width - size;
    let x = if x_span > 0.0 {
        rng.random_range(0.0..x_span)
    } else {
        0.0
    };
    let speed = rng.random_range(config.min_speed..config.max_speed);

    Balloon {
        id,
        color,
        shape,
        pattern,
        pos: Vec2::new(x, config.screen_height),
        speed,
        size,
    }
}
