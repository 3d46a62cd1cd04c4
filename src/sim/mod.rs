//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Logical clock only
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod events;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{Scheduler, TimerKind};
pub use events::GameEvent;
pub use spawn::generate_balloon;
pub use state::{Balloon, BalloonColor, BalloonPattern, BalloonShape, Phase, Session, Snapshot};
pub use tick::{
    on_motion_tick, on_object_tapped, on_spawn_tick, on_tick, reset_for_replay, start_session,
    stop, tap_at,
};
