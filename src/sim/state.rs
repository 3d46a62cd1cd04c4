//! Session state and core simulation types
//!
//! Everything a round needs lives in [`Session`]; there is no global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::GameConfig;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Title screen, no round played yet
    #[default]
    Ready,
    /// Round in progress
    Playing,
    /// Round over, final score on display
    GameOver,
}

/// Balloon fill color (serialized as a CSS color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalloonColor {
    #[serde(rename = "#FF1493")]
    DeepPink,
    #[serde(rename = "#800080")]
    Purple,
    #[serde(rename = "#FFA500")]
    Orange,
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "green")]
    Green,
}

impl BalloonColor {
    pub const ALL: [Self; 5] = [
        Self::DeepPink,
        Self::Purple,
        Self::Orange,
        Self::Red,
        Self::Green,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalloonShape {
    Circle,
    Heart,
    Star,
    Triangle,
}

impl BalloonShape {
    pub const ALL: [Self; 4] = [Self::Circle, Self::Heart, Self::Star, Self::Triangle];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalloonPattern {
    #[serde(rename = "stripes")]
    Stripes,
    #[serde(rename = "polka dots")]
    PolkaDots,
    #[serde(rename = "chevron")]
    Chevron,
    #[serde(rename = "zigzag")]
    Zigzag,
}

impl BalloonPattern {
    pub const ALL: [Self; 4] = [Self::Stripes, Self::PolkaDots, Self::Chevron, Self::Zigzag];
}

/// A rising balloon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    pub id: u32,
    pub color: BalloonColor,
    pub shape: BalloonShape,
    pub pattern: BalloonPattern,
    /// Top-left corner in screen pixels (y grows downward)
    pub pos: Vec2,
    /// Pixels risen per motion tick
    pub speed: f32,
    pub size: f32,
}

impl Balloon {
    /// Move up by one motion tick
    pub fn rise(&mut self) {
        self.pos.y -= self.speed;
    }

    /// Above the exit line and therefore missed
    pub fn has_exited(&self, exit_y: f32) -> bool {
        self.pos.y < exit_y
    }

    /// Whether a screen point falls inside the balloon's bounds
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.pos + Vec2::splat(self.size);
        point.x >= self.pos.x && point.x < max.x && point.y >= self.pos.y && point.y < max.y
    }
}

/// Complete state of one game (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub config: GameConfig,
    pub phase: Phase,
    /// Accepting ticks, spawns and taps
    pub running: bool,
    pub score: u32,
    pub time_remaining: u32,
    pub missed_count: u32,
    pub popped_count: u32,
    /// Live balloons in spawn order
    pub balloons: Vec<Balloon>,
    /// Score of the last finished round
    pub final_score: Option<u32>,
    /// Next entity ID, never reset so stale taps from earlier rounds miss
    next_id: u32,
}

impl Session {
    /// A session sitting on the title screen
    pub fn new(config: GameConfig) -> Self {
        let time_remaining = config.session_duration_seconds;
        let max_live = config.max_live_objects;
        Self {
            config,
            phase: Phase::Ready,
            running: false,
            score: 0,
            time_remaining,
            missed_count: 0,
            popped_count: 0,
            balloons: Vec::with_capacity(max_live),
            final_score: None,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Room for another balloon
    pub fn has_capacity(&self) -> bool {
        self.balloons.len() < self.config.max_live_objects
    }

    /// Topmost balloon under a point (later spawns draw on top)
    pub fn balloon_at(&self, point: Vec2) -> Option<u32> {
        self.balloons
            .iter()
            .rev()
            .find(|b| b.contains(point))
            .map(|b| b.id)
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            running: self.running,
            score: self.score,
            time_remaining: self.time_remaining,
            missed_count: self.missed_count,
            popped_count: self.popped_count,
            final_score: self.final_score,
            balloons: self.balloons.clone(),
        }
    }
}

/// What a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: Phase,
    pub running: bool,
    pub score: u32,
    pub time_remaining: u32,
    pub missed_count: u32,
    pub popped_count: u32,
    pub final_score: Option<u32>,
    pub balloons: Vec<Balloon>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
