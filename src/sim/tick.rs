//! Session operations
//!
//! Each function is one discrete state transition on a [`Session`]. None of
//! them can fail: input that does not apply (a tap on a popped balloon, a
//! spawn at capacity, a tick after the round ended) is ignored.

use glam::Vec2;
use rand::Rng;

use super::spawn::generate_balloon;
use super::state::{Phase, Session};

/// Reset every counter and begin a round
pub fn start_session(session: &mut Session) {
    session.score = 0;
    session.missed_count = 0;
    session.popped_count = 0;
    session.balloons.clear();
    session.time_remaining = session.config.session_duration_seconds;
    session.final_score = None;
    session.running = true;
    session.phase = Phase::Playing;
    log::info!(
        "Round started ({}s, up to {} balloons)",
        session.time_remaining,
        session.config.max_live_objects
    );
}

/// Start again from the game over screen. Ignored mid-round.
pub fn reset_for_replay(session: &mut Session) -> bool {
    if session.running {
        return false;
    }
    start_session(session);
    true
}

/// One second elapsed. Returns true when this tick ended the round.
///
/// The round ends on the tick that brings the timer to zero, so a 30 second
/// round ends after exactly 30 ticks with `time_remaining == 0`.
pub fn on_tick(session: &mut Session) -> bool {
    if !session.running {
        return false;
    }
    session.time_remaining = session.time_remaining.saturating_sub(1);
    if session.time_remaining == 0 {
        end_session(session);
        return true;
    }
    false
}

/// Add a balloon if there is room. Returns the new balloon's id.
pub fn on_spawn_tick<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> Option<u32> {
    if !session.running || !session.has_capacity() {
        return None;
    }
    let id = session.next_entity_id();
    let balloon = generate_balloon(id, &session.config, rng);
    log::debug!(
        "Spawned balloon {} at x={:.1} speed={:.2}",
        id,
        balloon.pos.x,
        balloon.speed
    );
    session.balloons.push(balloon);
    Some(id)
}

/// Raise every balloon, then drop the ones past the exit line.
/// Returns the ids of the balloons that got away.
pub fn on_motion_tick(session: &mut Session) -> Vec<u32> {
    if !session.running {
        return Vec::new();
    }

    for balloon in &mut session.balloons {
        balloon.rise();
    }

    let exit_y = session.config.exit_y;
    let mut missed = Vec::new();
    session.balloons.retain(|b| {
        if b.has_exited(exit_y) {
            missed.push(b.id);
            false
        } else {
            true
        }
    });

    for id in &missed {
        session.missed_count += 1;
        session.score = session.score.saturating_sub(1);
        log::debug!("Balloon {} escaped (score {})", id, session.score);
    }
    missed
}

/// Pop the balloon with this id. Returns false if it is already gone.
pub fn on_object_tapped(session: &mut Session, id: u32) -> bool {
    if !session.running {
        return false;
    }
    let Some(index) = session.balloons.iter().position(|b| b.id == id) else {
        return false;
    };
    session.balloons.remove(index);
    session.popped_count += 1;
    session.score += 1;
    log::debug!("Popped balloon {} (score {})", id, session.score);
    true
}

/// Pop whatever balloon is under a screen point
pub fn tap_at(session: &mut Session, point: Vec2) -> Option<u32> {
    if !session.running {
        return None;
    }
    let id = session.balloon_at(point)?;
    on_object_tapped(session, id).then_some(id)
}

/// End the round early. Returns false if no round was running.
pub fn stop(session: &mut Session) -> bool {
    if !session.running {
        return false;
    }
    end_session(session);
    true
}

fn end_session(session: &mut Session) {
    session.running = false;
    session.phase = Phase::GameOver;
    session.final_score = Some(session.score);
    log::info!(
        "Round over: score {} (popped {}, missed {})",
        session.score,
        session.popped_count,
        session.missed_count
    );
}
