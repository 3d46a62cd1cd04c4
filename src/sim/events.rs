//! Game events
//!
//! Produced while the clock advances so a front-end can play sounds or
//! effects without diffing snapshots.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// A new round began
    Started,
    /// One second elapsed
    Tick { time_remaining: u32 },
    /// A balloon entered at the bottom
    Spawned { id: u32 },
    /// A balloon was tapped
    Popped { id: u32 },
    /// A balloon floated off the top
    Missed { id: u32 },
    /// The round is over
    Ended { final_score: u32 },
}
