//! Fixed timestep simulation tick
//!
//! One tick runs, in order: pointer input, goalie patrol, puck flight, the
//! save test and then the goal test. Testing the save first means a puck
//! that is both in the goalie's reach and past the goal line is a save.

use std::time::Duration;

use glam::Vec2;

use super::puck::{Outcome, PuckStep, Release};
use super::state::{GameEvent, GameSession};

/// A pointer event sampled at a tick boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Up(Vec2),
    /// Cursor moved (drives the aim indicator only)
    Move(Vec2),
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub pointer: Option<PointerEvent>,
}

impl TickInput {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            pointer: Some(PointerEvent::Down(Vec2::new(x, y))),
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            pointer: Some(PointerEvent::Up(Vec2::new(x, y))),
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            pointer: Some(PointerEvent::Move(Vec2::new(x, y))),
        }
    }
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, input: &TickInput, dt: Duration) {
    session.events.clear();
    session.time_ticks += 1;
    session.clock += dt;

    apply_input(session, input);

    session.goalie.patrol();

    match session.puck.step(session.clock) {
        PuckStep::OutOfBounds => {
            session.stats.misses += 1;
            log::debug!("Puck left the ice at tick {}", session.time_ticks);
            session.events.push(GameEvent::OutOfBounds);
        }
        PuckStep::Returned => {
            log::debug!("Puck back on the spot");
            session.events.push(GameEvent::PuckReset);
        }
        PuckStep::Resting | PuckStep::Flying | PuckStep::Holding => {}
    }

    resolve_shot(session);
}

fn apply_input(session: &mut GameSession, input: &TickInput) {
    let Some(event) = input.pointer else {
        return;
    };

    match event {
        PointerEvent::Move(pos) => {
            session.pointer = Some(pos);
        }
        PointerEvent::Down(pos) => {
            session.pointer = Some(pos);
            if session.puck.start_drag(pos) {
                log::debug!("Drag started at ({:.0}, {:.0})", pos.x, pos.y);
                session.events.push(GameEvent::DragStarted { at: pos });
            }
        }
        PointerEvent::Up(pos) => {
            session.pointer = Some(pos);
            match session.puck.shoot(pos) {
                Release::Launched { power } => {
                    session.stats.shots += 1;
                    log::info!("Shot #{} with power {:.1}", session.stats.shots, power);
                    session.events.push(GameEvent::ShotTaken { power });
                }
                Release::Cancelled => {
                    session.stats.cancelled += 1;
                    log::debug!("Shot cancelled (release not above press)");
                    session.events.push(GameEvent::ShotCancelled);
                }
                Release::Ignored => {}
            }
        }
    }
}

/// Save test first, then goal test
fn resolve_shot(session: &mut GameSession) {
    if !session.puck.is_airborne() {
        return;
    }

    if session.goalie.check_collision(&session.puck) {
        session.puck.resolve(Outcome::Blocked, session.clock);
        session.stats.saves += 1;
        log::info!("Save! (depth {:.0})", session.puck.z);
        session.events.push(GameEvent::Saved);
    } else if session.net.check_goal(&session.puck) {
        session.puck.resolve(Outcome::Scored, session.clock);
        session.score += 1;
        session.stats.goals += 1;
        log::info!("Goal! Score: {}", session.score);
        session.events.push(GameEvent::Goal {
            score: session.score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PuckPhase;
    use glam::Vec3;

    const DT: Duration = Duration::from_millis(10);

    /// Press on the spot, then release straight up 150 units (full power)
    fn straight_shot(session: &mut GameSession) {
        tick(session, &TickInput::down(400.0, 500.0), DT);
        assert!(session.puck.is_dragging());
        tick(session, &TickInput::up(400.0, 350.0), DT);
        assert!(session.events.contains(&GameEvent::ShotTaken { power: 15.0 }));
    }

    /// Run empty ticks until an event shows up or `max` ticks pass
    fn run_until(session: &mut GameSession, max: usize, want: fn(&GameEvent) -> bool) -> bool {
        for _ in 0..max {
            if session.events.iter().any(want) {
                return true;
            }
            tick(session, &TickInput::default(), DT);
        }
        session.events.iter().any(want)
    }

    /// Airborne puck parked at `pos`/`z` with no velocity
    fn park_puck(session: &mut GameSession, pos: Vec2, z: f32) {
        session.puck.phase = PuckPhase::Airborne;
        session.puck.pos = pos;
        session.puck.z = z;
        session.puck.vel = Vec3::ZERO;
    }

    #[test]
    fn test_straight_shot_into_centered_goalie_is_saved() {
        let mut session = GameSession::default();
        straight_shot(&mut session);
        assert!(run_until(&mut session, 10, |e| *e == GameEvent::Saved));
        assert!(session.puck.blocked());
        assert!(session.puck.z > 200.0 && session.puck.z <= 300.0);
        assert_eq!(session.score, 0);
        assert_eq!(session.stats.saves, 1);
    }

    #[test]
    fn test_straight_shot_scores_past_goalie_on_far_post() {
        let mut session = GameSession::default();
        session.goalie.pos.x = 270.0;
        straight_shot(&mut session);
        assert!(run_until(&mut session, 10, |e| matches!(e, GameEvent::Goal { .. })));
        assert!(session.puck.scored());
        assert!(session.puck.z > 300.0);
        assert!(session.puck.pos.x > session.net.left() && session.puck.pos.x < session.net.right());
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_save_wins_when_both_tests_pass() {
        let mut session = GameSession::default();
        // Inside goalie and net, deep enough for both
        park_puck(&mut session, Vec2::new(400.0, 300.0), 350.0);
        tick(&mut session, &TickInput::default(), DT);
        assert!(session.puck.blocked());
        assert_eq!(session.events, vec![GameEvent::Saved]);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_blocked_at_reach_depth() {
        let mut session = GameSession::default();
        park_puck(&mut session, Vec2::new(400.0, 300.0), 250.0);
        tick(&mut session, &TickInput::default(), DT);
        assert!(session.puck.blocked());
        assert!(!session.puck.scored());
    }

    #[test]
    fn test_shallow_puck_in_both_frames_resolves_nothing() {
        // Between the two thresholds neither test fires; the puck keeps flying
        let mut session = GameSession::default();
        park_puck(&mut session, Vec2::new(400.0, 300.0), 180.0);
        for _ in 0..5 {
            tick(&mut session, &TickInput::default(), DT);
        }
        assert!(session.puck.is_airborne());
        assert_eq!(session.score, 0);
        assert_eq!(session.stats.saves, 0);
    }

    #[test]
    fn test_goal_holds_for_dwell_then_resets() {
        let mut session = GameSession::default();
        session.goalie.pos.x = 270.0;
        straight_shot(&mut session);
        assert!(run_until(&mut session, 10, |e| matches!(e, GameEvent::Goal { .. })));
        let scored_at = session.clock;

        // 199 ticks of 10ms: 1990ms after the goal
        for _ in 0..199 {
            tick(&mut session, &TickInput::default(), DT);
            assert!(session.puck.scored());
        }
        assert_eq!(session.clock - scored_at, Duration::from_millis(1990));

        tick(&mut session, &TickInput::default(), DT);
        assert_eq!(session.clock - scored_at, Duration::from_millis(2000));
        assert_eq!(session.events, vec![GameEvent::PuckReset]);
        assert_eq!(session.puck.phase(), PuckPhase::Idle);
        assert_eq!(session.puck.pos, session.puck.spot());
        assert_eq!(session.puck.z, 0.0);
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_input_blocked_while_outcome_on_display() {
        let mut session = GameSession::default();
        straight_shot(&mut session);
        assert!(run_until(&mut session, 10, |e| *e == GameEvent::Saved));
        let pos = session.puck.pos;
        tick(&mut session, &TickInput::down(pos.x, pos.y), DT);
        assert!(session.puck.blocked());
        assert!(session.events.is_empty());
    }

    #[test]
    fn test_downward_release_cancels() {
        let mut session = GameSession::default();
        tick(&mut session, &TickInput::down(400.0, 500.0), DT);
        tick(&mut session, &TickInput::up(380.0, 560.0), DT);
        assert_eq!(session.events, vec![GameEvent::ShotCancelled]);
        assert_eq!(session.puck.phase(), PuckPhase::Idle);
        assert_eq!(session.stats.cancelled, 1);
        assert_eq!(session.stats.shots, 0);
    }

    #[test]
    fn test_stray_pointer_events_do_nothing() {
        let mut session = GameSession::default();
        tick(&mut session, &TickInput::down(100.0, 100.0), DT);
        assert!(!session.puck.is_dragging());
        tick(&mut session, &TickInput::up(400.0, 300.0), DT);
        assert_eq!(session.puck.phase(), PuckPhase::Idle);
        assert!(session.events.is_empty());
        assert_eq!(session.pointer, Some(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_nan_press_never_launches() {
        let mut session = GameSession::default();
        tick(&mut session, &TickInput::down(f32::NAN, 500.0), DT);
        assert!(!session.puck.is_dragging());
        tick(&mut session, &TickInput::up(400.0, 350.0), DT);
        for _ in 0..50 {
            tick(&mut session, &TickInput::default(), DT);
            assert!(!session.puck.is_shot());
        }
        assert_eq!(session.stats.shots, 0);

        // A real press still works afterwards
        tick(&mut session, &TickInput::down(400.0, 500.0), DT);
        assert!(session.puck.is_dragging());
    }

    #[test]
    fn test_wide_shot_goes_out_of_bounds() {
        let mut session = GameSession::default();
        tick(&mut session, &TickInput::down(400.0, 500.0), DT);
        // Hard flick almost flat to the left
        tick(&mut session, &TickInput::up(250.0, 499.0), DT);
        assert!(run_until(&mut session, 60, |e| *e == GameEvent::OutOfBounds));
        assert_eq!(session.puck.phase(), PuckPhase::Idle);
        assert_eq!(session.stats.misses, 1);
    }

    #[test]
    fn test_goalie_patrols_every_tick() {
        let mut session = GameSession::default();
        let x0 = session.goalie.pos.x;
        tick(&mut session, &TickInput::moved(10.0, 10.0), DT);
        assert_eq!(session.goalie.pos.x, x0 + 3.0);
        assert_eq!(session.time_ticks, 1);
        assert_eq!(session.clock, DT);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            TickInput::down(400.0, 500.0),
            TickInput::moved(420.0, 420.0),
            TickInput::up(430.0, 380.0),
            TickInput::default(),
            TickInput::default(),
            TickInput::default(),
        ];

        let mut a = GameSession::default();
        let mut b = GameSession::default();
        for input in &inputs {
            tick(&mut a, input, DT);
            tick(&mut b, input, DT);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.puck.pos, b.puck.pos);
        assert_eq!(a.puck.z, b.puck.z);
        assert_eq!(a.goalie.pos, b.goalie.pos);
    }
}
