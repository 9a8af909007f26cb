//! Goal net geometry
//!
//! The net is a flat front rectangle plus a fake depth used only to draw the
//! slanted posts and mesh. Goal detection looks at the front rectangle and
//! the puck's depth.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::puck::Puck;
use crate::settings::{FieldTuning, NetTuning};
use crate::strictly_inside;

/// Spacing between mesh strands
pub const MESH_SPACING: f32 = 15.0;

/// A line segment in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }
}

/// The goal. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Net {
    /// Top-left corner of the front frame
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Projection depth (visual only)
    pub depth: f32,
    /// Puck depth beyond which it is past the goal line
    pub goal_depth: f32,
}

impl Net {
    /// Center the net horizontally, lifted `raise` above the field's middle
    pub fn new(field: &FieldTuning, tuning: &NetTuning) -> Self {
        let pos = Vec2::new(
            field.width / 2.0 - tuning.width / 2.0,
            field.height / 2.0 - tuning.height / 2.0 - tuning.raise,
        );
        Self {
            pos,
            width: tuning.width,
            height: tuning.height,
            depth: tuning.depth,
            goal_depth: tuning.goal_depth,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// True once the puck is strictly inside the front frame and past the
    /// goal line. A puck lined up with the mouth but still shallow is not a
    /// goal yet.
    pub fn check_goal(&self, puck: &Puck) -> bool {
        strictly_inside(puck.pos, self.pos, self.size()) && puck.z > self.goal_depth
    }

    /// The four slanted depth posts, one from each frame corner
    pub fn depth_posts(&self) -> [Segment; 4] {
        let d = self.depth;
        let (l, r, t, b) = (self.left(), self.right(), self.pos.y, self.bottom());
        [
            Segment::new(Vec2::new(l, t), Vec2::new(l - d, t + d)),
            Segment::new(Vec2::new(r, t), Vec2::new(r + d, t + d)),
            Segment::new(Vec2::new(l, b), Vec2::new(l - d, b + d)),
            Segment::new(Vec2::new(r, b), Vec2::new(r + d, b + d)),
        ]
    }

    /// Mesh strands across the mouth. Each vertical strand has a companion
    /// slanting back-right, each horizontal one a companion slanting back-left.
    pub fn mesh_lines(&self) -> Vec<Segment> {
        let half = (self.depth / 2.0).floor();
        let (l, r, t, b) = (self.left(), self.right(), self.pos.y, self.bottom());
        let mut lines = Vec::new();

        let mut x = l + MESH_SPACING;
        while x < r {
            lines.push(Segment::new(Vec2::new(x, t), Vec2::new(x, b)));
            lines.push(Segment::new(Vec2::new(x, t), Vec2::new(x + half, t + self.depth)));
            x += MESH_SPACING;
        }

        let mut y = t + MESH_SPACING;
        while y < b {
            lines.push(Segment::new(Vec2::new(l, y), Vec2::new(r, y)));
            lines.push(Segment::new(Vec2::new(l, y), Vec2::new(l - half, y + self.depth)));
            y += MESH_SPACING;
        }

        lines
    }
}
