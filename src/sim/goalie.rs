//! Patrolling goalie
//!
//! Sweeps back and forth across the mouth of the net at a fixed speed. The
//! patrol bounds are copied out of the net at construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::net::Net;
use super::puck::Puck;
use crate::settings::GoalieTuning;
use crate::strictly_inside;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goalie {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Units per tick
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    /// Puck depth beyond which it is within reach
    pub reach_depth: f32,
    min_x: f32,
    max_x: f32,
}

impl Goalie {
    /// Stand centered in the net with skates on the goal line
    pub fn new(net: &Net, tuning: &GoalieTuning) -> Self {
        let pos = Vec2::new(
            net.left() + net.width / 2.0 - tuning.width / 2.0,
            net.bottom() - tuning.height,
        );
        Self {
            pos,
            width: tuning.width,
            height: tuning.height,
            speed: tuning.speed,
            direction: 1.0,
            reach_depth: tuning.reach_depth,
            min_x: net.left() + tuning.margin,
            max_x: net.right() - tuning.width - tuning.margin,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Leftmost and rightmost x the goalie's left edge may occupy
    pub fn patrol_bounds(&self) -> (f32, f32) {
        (self.min_x, self.max_x)
    }

    /// Advance one tick; turn around at either bound
    pub fn patrol(&mut self) {
        self.pos.x += self.speed * self.direction;
        if self.pos.x > self.max_x {
            self.pos.x = self.max_x;
            self.direction = -1.0;
        } else if self.pos.x < self.min_x {
            self.pos.x = self.min_x;
            self.direction = 1.0;
        }
    }

    /// True if the puck is within reach and inside the goalie's body
    pub fn check_collision(&self, puck: &Puck) -> bool {
        puck.z > self.reach_depth && strictly_inside(puck.pos, self.pos, self.size())
    }
}
