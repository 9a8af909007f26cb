//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, time is passed in
//! - No wall clock, no randomness
//! - No rendering or platform dependencies

pub mod goalie;
pub mod net;
pub mod puck;
pub mod state;
pub mod tick;

pub use goalie::Goalie;
pub use net::{MESH_SPACING, Net, Segment};
pub use puck::{Outcome, Puck, PuckPhase, PuckStep, Release};
pub use state::{GameEvent, GameSession, ShotStats};
pub use tick::{PointerEvent, TickInput, tick};
