//! Logical clock for the three recurring game timers
//!
//! Time only moves when [`Scheduler::advance`] is called, so tests can run a
//! whole round synchronously. Timers due at the same instant fire in
//! [`TimerKind`] order.

use crate::settings::GameConfig;

/// Which recurring timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerKind {
    /// Countdown, once per second
    Tick,
    /// Balloon spawner
    Spawn,
    /// Balloon movement
    Motion,
}

#[derive(Debug, Clone)]
struct Timer {
    kind: TimerKind,
    interval_ms: u32,
    /// Time since this timer last fired
    elapsed_ms: u32,
}

impl Timer {
    fn new(kind: TimerKind, interval_ms: u32) -> Self {
        Self {
            kind,
            // A zero interval would fire forever within one advance
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    fn due_in(&self) -> u32 {
        self.interval_ms - self.elapsed_ms
    }
}

/// Drives tick, spawn and motion timers from a logical millisecond clock
#[derive(Debug, Clone)]
pub struct Scheduler {
    timers: [Timer; 3],
    armed: bool,
    now_ms: u64,
}

impl Scheduler {
    /// Disarmed scheduler using the config's cadences
    pub fn new(config: &GameConfig) -> Self {
        Self {
            timers: [
                Timer::new(TimerKind::Tick, config.tick_interval_ms),
                Timer::new(TimerKind::Spawn, config.spawn_interval_ms),
                Timer::new(TimerKind::Motion, config.motion_interval_ms),
            ],
            armed: false,
            now_ms: 0,
        }
    }

    /// Start all three timers from zero
    pub fn arm(&mut self) {
        for timer in &mut self.timers {
            timer.elapsed_ms = 0;
        }
        self.armed = true;
    }

    /// Retract all three timers at once
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Logical time advanced so far
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward, calling `fire` for every timer that comes due.
    ///
    /// `fire` returns whether the timers should keep running; returning false
    /// cancels all of them before anything else fires. Returns the number of
    /// timers fired.
    pub fn advance<F>(&mut self, dt_ms: u32, mut fire: F) -> u32
    where
        F: FnMut(TimerKind) -> bool,
    {
        let mut remaining = dt_ms;
        let mut fired = 0;

        while self.armed {
            let next = self
                .timers
                .iter()
                .enumerate()
                .min_by_key(|(_, t)| (t.due_in(), t.kind))
                .map(|(i, t)| (i, t.due_in()));
            let Some((index, due_in)) = next else {
                break;
            };
            if due_in > remaining {
                self.step(remaining);
                remaining = 0;
                break;
            }

            self.step(due_in);
            remaining -= due_in;
            self.timers[index].elapsed_ms = 0;
            fired += 1;

            if !fire(self.timers[index].kind) {
                self.cancel();
            }
        }

        // Cancelled mid-frame: the rest of the frame still passes
        self.now_ms += u64::from(remaining);
        fired
    }

    fn step(&mut self, ms: u32) {
        for timer in &mut self.timers {
            timer.elapsed_ms += ms;
        }
        self.now_ms += u64::from(ms);
    }
}
