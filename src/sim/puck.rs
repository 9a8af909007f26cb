//! The puck: shot lifecycle and flight integration
//!
//! Lifecycle: `Idle -> Dragging -> Airborne -> Resolved -> Idle`. The puck
//! integrates its own flight and leaves the field on its own, but saves and
//! goals are decided by the session (see `tick`) and handed in through
//! [`Puck::resolve`].
//!
//! Screen y grows downward, so an upward flick has negative `vel.y`. `z` is a
//! fake depth into the screen that only shrinks the puck and gates the save
//! and goal tests.

use std::time::Duration;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::settings::{FieldTuning, PuckTuning, Tuning};
use crate::{scaled_radius, shot_power};

/// How a shot ended when the session decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Goalie got a piece of it
    Blocked,
    Scored,
}

/// Where the puck is in its shot lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PuckPhase {
    /// Sitting on the shooting spot
    Idle,
    /// Pointer pressed on the puck at `start`
    Dragging { start: Vec2 },
    /// In flight
    Airborne,
    /// Save or goal on display since `at`
    Resolved { outcome: Outcome, at: Duration },
}

/// What a pointer release did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// No drag was active
    Ignored,
    /// Released level with or below the press point
    Cancelled,
    Launched { power: f32 },
}

/// What a single integration step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuckStep {
    /// Idle or dragging, nothing to integrate
    Resting,
    Flying,
    /// Left the field and went back to the spot
    OutOfBounds,
    /// Outcome still on display
    Holding,
    /// Outcome display finished and the puck went back to the spot
    Returned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puck {
    pub pos: Vec2,
    /// Depth into the screen
    pub z: f32,
    pub vel: Vec3,
    /// Depth-scaled radius in whole units
    pub current_radius: f32,
    /// Degrees
    pub rotation: f32,
    /// Degrees per tick
    pub spin_speed: f32,
    /// Screen y at launch
    pub baseline_y: f32,
    /// How far the puck has travelled on screen since launch (visual arc only)
    pub height_offset: f32,
    pub(crate) phase: PuckPhase,
    tuning: PuckTuning,
    field: FieldTuning,
    dwell: Duration,
}

impl Puck {
    pub fn new(tuning: &Tuning) -> Self {
        let mut puck = Self {
            pos: Vec2::ZERO,
            z: 0.0,
            vel: Vec3::ZERO,
            current_radius: tuning.puck.radius,
            rotation: 0.0,
            spin_speed: 0.0,
            baseline_y: 0.0,
            height_offset: 0.0,
            phase: PuckPhase::Idle,
            tuning: tuning.puck,
            field: tuning.field,
            dwell: tuning.dwell(),
        };
        puck.reset();
        puck
    }

    /// Shooting spot: centered, `spot_inset` above the bottom edge
    pub fn spot(&self) -> Vec2 {
        Vec2::new(
            self.field.width / 2.0,
            self.field.height - self.tuning.spot_inset,
        )
    }

    /// Base (undistorted) radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.tuning.radius
    }

    #[inline]
    pub fn phase(&self) -> PuckPhase {
        self.phase
    }

    /// Back to the shooting spot, at rest
    pub fn reset(&mut self) {
        self.pos = self.spot();
        self.z = 0.0;
        self.vel = Vec3::ZERO;
        self.current_radius = self.tuning.radius;
        self.rotation = 0.0;
        self.spin_speed = 0.0;
        self.baseline_y = self.pos.y;
        self.height_offset = 0.0;
        self.phase = PuckPhase::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, PuckPhase::Dragging { .. })
    }

    /// Shot taken and not yet returned to the spot
    pub fn is_shot(&self) -> bool {
        matches!(self.phase, PuckPhase::Airborne | PuckPhase::Resolved { .. })
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self.phase, PuckPhase::Airborne)
    }

    pub fn drag_start(&self) -> Option<Vec2> {
        match self.phase {
            PuckPhase::Dragging { start } => Some(start),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            PuckPhase::Resolved { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// When the current outcome was reached
    pub fn resolved_at(&self) -> Option<Duration> {
        match self.phase {
            PuckPhase::Resolved { at, .. } => Some(at),
            _ => None,
        }
    }

    pub fn blocked(&self) -> bool {
        self.outcome() == Some(Outcome::Blocked)
    }

    pub fn scored(&self) -> bool {
        self.outcome() == Some(Outcome::Scored)
    }

    /// Press at `pos`. Starts a drag if the press lands on the puck and no
    /// shot is in progress. A non-finite press never lands.
    pub fn start_drag(&mut self, pos: Vec2) -> bool {
        let on_puck = pos.distance(self.pos) < self.tuning.radius;
        if self.is_shot() || !on_puck {
            return false;
        }
        self.phase = PuckPhase::Dragging { start: pos };
        true
    }

    /// Release at `release`. Pull-and-flick: the puck flies along the drag
    /// vector with power from its length. A release that is not above the
    /// press point cancels the shot.
    pub fn shoot(&mut self, release: Vec2) -> Release {
        let PuckPhase::Dragging { start } = self.phase else {
            return Release::Ignored;
        };

        if !release.is_finite() || release.y >= start.y {
            self.phase = PuckPhase::Idle;
            return Release::Cancelled;
        }

        let delta = start - release;
        let power = shot_power(
            delta.length(),
            self.tuning.power_per_unit,
            self.tuning.max_power,
        );
        let angle = delta.y.atan2(delta.x);
        let launch = power * self.tuning.launch_scale;

        self.vel = Vec3::new(-angle.cos() * launch, -angle.sin() * launch, launch);
        self.spin_speed = power * self.tuning.spin_per_power;
        self.baseline_y = self.pos.y;
        self.phase = PuckPhase::Airborne;

        Release::Launched { power }
    }

    /// Hand a save or goal to the puck. Only an airborne puck can be resolved.
    pub fn resolve(&mut self, outcome: Outcome, now: Duration) -> bool {
        if !self.is_airborne() {
            return false;
        }
        self.phase = PuckPhase::Resolved { outcome, at: now };
        true
    }

    /// Advance one tick at simulated time `now`
    pub fn step(&mut self, now: Duration) -> PuckStep {
        match self.phase {
            PuckPhase::Idle | PuckPhase::Dragging { .. } => PuckStep::Resting,
            PuckPhase::Resolved { at, .. } => {
                if now.saturating_sub(at) >= self.dwell {
                    self.reset();
                    PuckStep::Returned
                } else {
                    PuckStep::Holding
                }
            }
            PuckPhase::Airborne => {
                self.integrate();
                if self.out_of_bounds() {
                    self.reset();
                    PuckStep::OutOfBounds
                } else {
                    PuckStep::Flying
                }
            }
        }
    }

    fn integrate(&mut self) {
        let t = &self.tuning;

        self.vel.y += t.gravity;
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;
        self.z += self.vel.z;
        self.vel *= t.velocity_decay;

        self.rotation += self.spin_speed;
        self.spin_speed *= t.spin_decay;

        self.current_radius = scaled_radius(t.radius, self.z, t.depth_falloff, t.min_depth_scale);
        self.height_offset = self.pos.y - self.baseline_y;
    }

    /// Off the field, too deep, or no longer a real position
    fn out_of_bounds(&self) -> bool {
        !self.pos.is_finite()
            || !self.z.is_finite()
            || self.pos.y > self.field.height
            || self.z > self.tuning.max_depth
            || self.pos.x < 0.0
            || self.pos.x > self.field.width
    }
}
