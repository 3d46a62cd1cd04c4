//! Game controller
//!
//! Owns the session, its seeded RNG and its scheduler, and turns front-end
//! actions (start, tap, frame time) into session operations.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::MAX_FRAME_MS;
use crate::error::ConfigError;
use crate::settings::GameConfig;
use crate::sim::{self, GameEvent, Scheduler, Session, Snapshot, TimerKind};

pub struct Game {
    seed: u64,
    session: Session,
    rng: Pcg32,
    scheduler: Scheduler,
    /// Sub-millisecond frame time not yet fed to the clock
    frame_carry_ms: f64,
}

impl Game {
    /// A game on the title screen. Rejects configs the loop cannot run with.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let scheduler = Scheduler::new(&config);
        Ok(Self {
            seed,
            session: Session::new(config),
            rng: Pcg32::seed_from_u64(seed),
            scheduler,
            frame_carry_ms: 0.0,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.session.running
    }

    /// "Start Game": begin a fresh round, whatever state we were in
    pub fn start(&mut self) -> GameEvent {
        sim::start_session(&mut self.session);
        self.scheduler.arm();
        self.frame_carry_ms = 0.0;
        GameEvent::Started
    }

    /// "Play Again": only from the game over screen
    pub fn play_again(&mut self) -> Option<GameEvent> {
        if !sim::reset_for_replay(&mut self.session) {
            return None;
        }
        self.scheduler.arm();
        self.frame_carry_ms = 0.0;
        Some(GameEvent::Started)
    }

    /// End the round now
    pub fn stop(&mut self) -> Option<GameEvent> {
        if !sim::stop(&mut self.session) {
            return None;
        }
        self.scheduler.cancel();
        Some(GameEvent::Ended {
            final_score: self.session.score,
        })
    }

    /// Tap a balloon by id
    pub fn tap(&mut self, id: u32) -> Option<GameEvent> {
        sim::on_object_tapped(&mut self.session, id).then_some(GameEvent::Popped { id })
    }

    /// Tap a screen point
    pub fn tap_at(&mut self, point: Vec2) -> Option<GameEvent> {
        sim::tap_at(&mut self.session, point).map(|id| GameEvent::Popped { id })
    }

    /// Advance logical time by exactly `dt_ms`, firing every due timer
    pub fn advance(&mut self, dt_ms: u32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let session = &mut self.session;
        let rng = &mut self.rng;

        self.scheduler.advance(dt_ms, |kind| {
            match kind {
                TimerKind::Tick => {
                    if sim::on_tick(session) {
                        events.push(GameEvent::Ended {
                            final_score: session.score,
                        });
                    } else if session.running {
                        events.push(GameEvent::Tick {
                            time_remaining: session.time_remaining,
                        });
                    }
                }
                TimerKind::Spawn => {
                    if let Some(id) = sim::on_spawn_tick(session, rng) {
                        events.push(GameEvent::Spawned { id });
                    }
                }
                TimerKind::Motion => {
                    events.extend(
                        sim::on_motion_tick(session)
                            .into_iter()
                            .map(|id| GameEvent::Missed { id }),
                    );
                }
            }
            session.running
        });

        events
    }

    /// Advance by one rendered frame, clamping long frames (hidden tab, debugger)
    pub fn frame(&mut self, dt_ms: u32) -> Vec<GameEvent> {
        if dt_ms > MAX_FRAME_MS {
            log::warn!("Frame of {}ms clamped to {}ms", dt_ms, MAX_FRAME_MS);
        }
        self.advance(dt_ms.min(MAX_FRAME_MS))
    }

    /// Advance by a fractional frame time (e.g. `requestAnimationFrame` deltas).
    ///
    /// Whole milliseconds go to the clock; the remainder carries into the
    /// next frame so no time is lost to rounding.
    pub fn frame_fractional(&mut self, dt_ms: f64) -> Vec<GameEvent> {
        let max = f64::from(MAX_FRAME_MS);
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        if dt_ms > max {
            log::warn!("Frame of {:.1}ms clamped to {}ms", dt_ms, MAX_FRAME_MS);
        }
        let total = dt_ms.min(max) + self.frame_carry_ms;
        let whole = total.floor();
        self.frame_carry_ms = total - whole;
        self.advance(whole as u32)
    }
}
