//! Demo shooter
//!
//! Plays the game on its own: presses on the puck, drags around for a few
//! ticks and lets go. Seeded, so a given seed always takes the same shots.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GameSession, TickInput};

/// Chance that a gesture is released downward (a cancelled shot)
const CANCEL_CHANCE: f64 = 0.1;

/// A gesture in progress
#[derive(Debug, Clone, Copy)]
struct Gesture {
    press: Vec2,
    release: Vec2,
    hold_ticks: u32,
    held: u32,
}

#[derive(Debug, Clone)]
pub struct AutoShooter {
    rng: Pcg32,
    gesture: Option<Gesture>,
    /// Ticks to wait between shots
    pub cooldown_ticks: u32,
    wait: u32,
}

impl AutoShooter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            gesture: None,
            cooldown_ticks: 20,
            wait: 0,
        }
    }

    /// Input for the next tick
    pub fn next_input(&mut self, session: &GameSession) -> TickInput {
        let puck = &session.puck;

        if let Some(mut gesture) = self.gesture {
            if !puck.is_dragging() {
                // Drag never took or was consumed elsewhere
                self.gesture = None;
                return TickInput::default();
            }
            if gesture.held < gesture.hold_ticks {
                gesture.held += 1;
                self.gesture = Some(gesture);
                let t = gesture.held as f32 / gesture.hold_ticks as f32;
                let cursor = gesture.press.lerp(gesture.release, t);
                return TickInput::moved(cursor.x, cursor.y);
            }
            self.gesture = None;
            self.wait = self.cooldown_ticks;
            return TickInput::up(gesture.release.x, gesture.release.y);
        }

        if puck.is_shot() || puck.is_dragging() {
            return TickInput::default();
        }
        if self.wait > 0 {
            self.wait -= 1;
            return TickInput::default();
        }

        let press = puck.pos;
        let release = self.pick_release(press);
        self.gesture = Some(Gesture {
            press,
            release,
            hold_ticks: self.rng.random_range(3..12),
            held: 0,
        });
        TickInput::down(press.x, press.y)
    }

    /// Upward pull of random length and lean, or occasionally a downward one
    fn pick_release(&mut self, press: Vec2) -> Vec2 {
        let dx = self.rng.random_range(-120.0..120.0);
        if self.rng.random_bool(CANCEL_CHANCE) {
            return press + Vec2::new(dx, self.rng.random_range(0.0..60.0));
        }
        let dy = self.rng.random_range(60.0..200.0);
        press + Vec2::new(dx, -dy)
    }
}
