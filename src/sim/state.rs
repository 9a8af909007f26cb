//! Session state
//!
//! Everything one play session owns. No globals: the driver receives the
//! session by reference each tick.

use std::time::Duration;

use glam::Vec2;
use serde::Serialize;

use super::goalie::Goalie;
use super::net::Net;
use super::puck::Puck;
use crate::settings::Tuning;

/// Something that happened during a tick, for logging/sound/UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Pointer landed on the puck
    DragStarted { at: Vec2 },
    ShotTaken { power: f32 },
    /// Release was not above the press point
    ShotCancelled,
    Saved,
    Goal { score: u64 },
    /// Puck flew off the field or too deep and went back to the spot
    OutOfBounds,
    /// Outcome display ended and the puck went back to the spot
    PuckReset,
}

/// Running tally of shots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShotStats {
    pub shots: u32,
    pub saves: u32,
    pub goals: u32,
    pub misses: u32,
    pub cancelled: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    /// Goals scored; never decreases
    pub score: u64,
    pub net: Net,
    pub goalie: Goalie,
    pub puck: Puck,
    /// Simulated monotonic clock
    pub clock: Duration,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Last known pointer position
    pub pointer: Option<Vec2>,
    pub stats: ShotStats,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(tuning: Tuning) -> Self {
        let net = Net::new(&tuning.field, &tuning.net);
        let goalie = Goalie::new(&net, &tuning.goalie);
        let puck = Puck::new(&tuning);
        Self {
            tuning,
            score: 0,
            net,
            goalie,
            puck,
            clock: Duration::ZERO,
            time_ticks: 0,
            pointer: None,
            stats: ShotStats::default(),
            events: Vec::new(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
