//! Puck Shot headless runner
//!
//! Plays the game with the seeded demo shooter at the fixed timestep and
//! reports how it went. Set `RUST_LOG=info` (or `debug`) to follow each shot.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use puck_shot::consts::*;
use puck_shot::sim::{GameEvent, GameSession, tick};
use puck_shot::view::Frame;
use puck_shot::{AutoShooter, Tuning};

#[derive(Parser)]
#[command(name = "puck-shot")]
#[command(about = "Run a headless Puck Shot session with the demo shooter", long_about = None)]
struct Cli {
    /// Tuning JSON file (defaults are used if missing or invalid)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Fixed simulation ticks to run (60 per simulated second)
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Demo shooter seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Simulated display refresh rate (frames per second)
    #[arg(long, default_value_t = 30.0)]
    fps: f32,

    /// Print the final frame as JSON
    #[arg(long)]
    json: bool,
}

/// Session plus the fixed-step accumulator
struct Game {
    session: GameSession,
    shooter: AutoShooter,
    accumulator: Duration,
}

impl Game {
    fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            session: GameSession::new(tuning),
            shooter: AutoShooter::new(seed),
            accumulator: Duration::ZERO,
        }
    }

    /// Run as many fixed ticks as `frame_dt` covers
    fn update(&mut self, frame_dt: Duration) {
        self.accumulator += frame_dt.min(Duration::from_millis(100));

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.shooter.next_input(&self.session);
            tick(&mut self.session, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            for event in &self.session.events {
                match event {
                    GameEvent::Goal { score } => {
                        log::info!("[{:>7.2}s] Goal! ({score})", self.session.clock.as_secs_f32())
                    }
                    GameEvent::Saved => {
                        log::info!("[{:>7.2}s] Save!", self.session.clock.as_secs_f32())
                    }
                    other => log::debug!("{other:?}"),
                }
            }
        }
    }
}

/// Wall time between simulated display frames, if `fps` gives a usable one
fn frame_interval(fps: f32) -> Option<Duration> {
    if !(fps.is_finite() && fps > 0.0) {
        return None;
    }
    Duration::try_from_secs_f32(1.0 / fps)
        .ok()
        .filter(|dt| !dt.is_zero())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };

    let Some(frame_dt) = frame_interval(cli.fps) else {
        log::error!("--fps must be a positive frame rate, got {}", cli.fps);
        return ExitCode::FAILURE;
    };

    log::info!("Puck Shot starting (seed {}, {} ticks at {} fps)", cli.seed, cli.ticks, cli.fps);

    let mut game = Game::new(tuning, cli.seed);
    while game.session.time_ticks < cli.ticks {
        game.update(frame_dt);
    }

    let stats = game.session.stats;
    println!(
        "{} ticks: {} shots, {} goals, {} saves, {} misses, {} cancelled. Score: {}",
        game.session.time_ticks,
        stats.shots,
        stats.goals,
        stats.saves,
        stats.misses,
        stats.cancelled,
        game.session.score
    );

    if cli.json {
        match serde_json::to_string_pretty(&Frame::build(&game.session)) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to serialize frame: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(4.0), Some(Duration::from_millis(250)));
        assert_eq!(frame_interval(0.0), None);
        assert_eq!(frame_interval(-30.0), None);
        assert_eq!(frame_interval(f32::NAN), None);
        assert_eq!(frame_interval(f32::INFINITY), None);
        // 1/fps overflows
        assert_eq!(frame_interval(1e-30), None);
        // 1/fps rounds to nothing
        assert_eq!(frame_interval(1e30), None);
    }

    #[test]
    fn test_runs_requested_ticks() {
        let mut game = Game::new(Tuning::default(), 42);
        let frame_dt = frame_interval(30.0).expect("valid fps");
        while game.session.time_ticks < 100 {
            game.update(frame_dt);
        }
        // The last frame may run a few substeps past the target
        let ticks = game.session.time_ticks;
        assert!((100..100 + MAX_SUBSTEPS as u64).contains(&ticks), "{ticks}");
    }
}
