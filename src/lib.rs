//! Puck Shot - a drag-and-release hockey shooting game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (puck flight, goalie patrol, net, outcomes)
//! - `settings`: Data-driven tuning loaded from JSON
//! - `view`: Renderer-agnostic drawable frame built from the simulation
//! - `autoplay`: Seeded demo shooter that feeds the simulation gestures

pub mod autoplay;
pub mod settings;
pub mod sim;
pub mod view;

pub use autoplay::AutoShooter;
pub use settings::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation rate
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: Duration = Duration::from_nanos(1_000_000_000 / TICK_HZ as u64);
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playing field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Net front frame and fake depth (depth is projection only)
    pub const NET_WIDTH: f32 = 300.0;
    pub const NET_HEIGHT: f32 = 200.0;
    pub const NET_DEPTH: f32 = 50.0;
    /// Net sits this far above the field's vertical center
    pub const NET_RAISE: f32 = 50.0;
    /// Puck must be deeper than this to count as past the goal line
    pub const GOAL_DEPTH: f32 = 300.0;

    /// Goalie defaults
    pub const GOALIE_WIDTH: f32 = 80.0;
    pub const GOALIE_HEIGHT: f32 = 140.0;
    pub const GOALIE_SPEED: f32 = 3.0;
    /// Gap kept between the goalie and each post
    pub const GOALIE_MARGIN: f32 = 20.0;
    /// Puck must be deeper than this to be within the goalie's reach
    pub const GOALIE_REACH_DEPTH: f32 = 200.0;

    /// Puck defaults
    pub const PUCK_RADIUS: f32 = 15.0;
    /// Shooting spot sits this far above the bottom edge
    pub const PUCK_SPOT_INSET: f32 = 100.0;
    pub const GRAVITY: f32 = 0.3;
    pub const VELOCITY_DECAY: f32 = 0.98;
    pub const SPIN_DECAY: f32 = 0.99;
    /// Drag distance to shot power
    pub const POWER_PER_UNIT: f32 = 0.1;
    pub const MAX_POWER: f32 = 15.0;
    /// Power to screen/forward speed
    pub const LAUNCH_SCALE: f32 = 4.0;
    /// Power to spin rate (degrees per tick)
    pub const SPIN_PER_POWER: f32 = 6.0;
    /// Depth at which the puck would shrink to nothing (before the floor)
    pub const DEPTH_FALLOFF: f32 = 800.0;
    /// Smallest on-screen scale relative to the base radius
    pub const MIN_DEPTH_SCALE: f32 = 0.2;
    /// Deeper than this the puck is gone
    pub const MAX_DEPTH: f32 = 1000.0;

    /// How long a save/goal stays on screen before the puck returns
    pub const OUTCOME_DWELL_MS: u64 = 2000;
}

/// True if `p` lies strictly inside the axis-aligned box at `min` with `size`.
/// Points on an edge are outside.
#[inline]
pub fn strictly_inside(p: Vec2, min: Vec2, size: Vec2) -> bool {
    p.x > min.x && p.x < min.x + size.x && p.y > min.y && p.y < min.y + size.y
}

/// On-screen scale for a puck at depth `z`: shrinks linearly with depth,
/// floored at `min_scale`.
#[inline]
pub fn depth_scale(z: f32, falloff: f32, min_scale: f32) -> f32 {
    (1.0 - z / falloff).max(min_scale)
}

/// Depth-scaled radius, truncated to whole units for drawing.
///
/// Never drops below `min_scale * base` (rounded up), so the result is
/// non-increasing in `z` and bounded below.
#[inline]
pub fn scaled_radius(base: f32, z: f32, falloff: f32, min_scale: f32) -> f32 {
    let floor = (base * min_scale).ceil();
    (base * depth_scale(z, falloff, min_scale)).trunc().max(floor)
}

/// Shot power for a drag of the given length, saturating at `max_power`.
///
/// Non-finite or negative lengths give zero power.
#[inline]
pub fn shot_power(drag_len: f32, per_unit: f32, max_power: f32) -> f32 {
    let power = drag_len * per_unit;
    if power.is_finite() {
        power.clamp(0.0, max_power)
    } else if power == f32::INFINITY {
        max_power
    } else {
        0.0
    }
}
