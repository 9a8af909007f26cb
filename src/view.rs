//! Drawable frame
//!
//! A renderer-agnostic snapshot of everything a painter needs for one frame:
//! the puck (body, shadow, spin highlight), the aim indicator, goalie, net
//! and HUD text. Building a frame never mutates the session.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GameSession, Net, Outcome, Segment};

/// Shadow sits this far below the puck
pub const SHADOW_OFFSET: f32 = 10.0;
/// Drag length shown as a full-power indicator
pub const AIM_FULL_POWER_LEN: f32 = 133.0;
/// Spin highlight distance from the puck center, as a fraction of its radius
const HIGHLIGHT_REACH: f32 = 0.3;
/// Ice apron half-width at the bottom edge of the field
const APRON_HALF_WIDTH: f32 = 200.0;
/// Ice apron overhang past each post
const APRON_OVERHANG: f32 = 20.0;

pub const SAVE_BANNER: &str = "Save!";
pub const GOAL_BANNER: &str = "Goal!";
pub const INSTRUCTIONS: &str = "Click and drag to shoot!";

/// RGB color
pub type Rgb = [u8; 3];

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PuckView {
    /// Ellipse bounds of the puck body, offset by the flight arc
    pub body: Rect,
    /// Flattened ellipse under the puck
    pub shadow: Rect,
    pub highlight_center: Vec2,
    pub highlight_radius: f32,
    pub depth: f32,
}

/// Drag line from the press point to the cursor
#[derive(Debug, Clone, Serialize)]
pub struct AimView {
    pub line: Segment,
    /// 0 (weak) to 1 (full power)
    pub power_fraction: f32,
    /// Green at no power through red at full power
    pub color: Rgb,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetView {
    pub front: Rect,
    pub depth_posts: [Segment; 4],
    pub mesh: Vec<Segment>,
    /// Ice reflection under the net, as a quad
    pub apron: [Vec2; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub net: NetView,
    pub goalie: Rect,
    pub puck: PuckView,
    pub aim: Option<AimView>,
    pub banner: Option<&'static str>,
    pub instructions: Option<&'static str>,
    pub score_text: String,
}

impl Frame {
    pub fn build(session: &GameSession) -> Self {
        let puck = &session.puck;

        let banner = puck.outcome().map(|outcome| match outcome {
            Outcome::Blocked => SAVE_BANNER,
            Outcome::Scored => GOAL_BANNER,
        });
        let instructions = (!puck.is_shot() && !puck.is_dragging()).then_some(INSTRUCTIONS);

        Self {
            net: net_view(&session.net, session.tuning.field.width, session.tuning.field.height),
            goalie: Rect {
                pos: session.goalie.pos,
                size: session.goalie.size(),
            },
            puck: puck_view(session),
            aim: aim_view(session),
            banner,
            instructions,
            score_text: format!("Score: {}", session.score),
        }
    }
}

fn puck_view(session: &GameSession) -> PuckView {
    let puck = &session.puck;
    let r = puck.current_radius;
    let lift = puck.height_offset;
    let Vec2 { x, y } = puck.pos;

    let spin = puck.rotation.to_radians();
    let highlight_center = Vec2::new(
        x + spin.cos() * r * HIGHLIGHT_REACH,
        y - lift + spin.sin() * r * HIGHLIGHT_REACH,
    );

    PuckView {
        body: Rect::new(x - r, y - r - lift, r * 2.0, r * 2.0),
        shadow: Rect::new(
            x - r,
            y + SHADOW_OFFSET + (lift / 3.0).max(0.0),
            r * 2.0,
            r,
        ),
        highlight_center,
        highlight_radius: (r / 4.0).floor(),
        depth: puck.z,
    }
}

/// Only shown while dragging with the cursor above the press point
fn aim_view(session: &GameSession) -> Option<AimView> {
    let start = session.puck.drag_start()?;
    let cursor = session.pointer?;
    if cursor.y >= start.y {
        return None;
    }

    let power_fraction = (start.distance(cursor) / AIM_FULL_POWER_LEN).min(1.0);
    let color = [
        (255.0 * power_fraction) as u8,
        (255.0 * (1.0 - power_fraction)) as u8,
        0,
    ];

    Some(AimView {
        line: Segment::new(start, cursor),
        power_fraction,
        color,
    })
}

fn net_view(net: &Net, field_width: f32, field_height: f32) -> NetView {
    let mid = field_width / 2.0;
    NetView {
        front: Rect {
            pos: net.pos,
            size: net.size(),
        },
        depth_posts: net.depth_posts(),
        mesh: net.mesh_lines(),
        apron: [
            Vec2::new(net.left() - APRON_OVERHANG, net.bottom()),
            Vec2::new(net.right() + APRON_OVERHANG, net.bottom()),
            Vec2::new(mid + APRON_HALF_WIDTH, field_height),
            Vec2::new(mid - APRON_HALF_WIDTH, field_height),
        ],
    }
}
