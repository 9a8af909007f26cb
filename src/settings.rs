//! Game tuning
//!
//! Every physics and geometry constant the simulation reads, grouped per
//! entity. Defaults come from `consts`; a JSON file may override any subset.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure to produce a usable [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Playing field size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// Net geometry and goal line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetTuning {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Distance the net is lifted above the field's vertical center
    pub raise: f32,
    pub goal_depth: f32,
}

impl Default for NetTuning {
    fn default() -> Self {
        Self {
            width: NET_WIDTH,
            height: NET_HEIGHT,
            depth: NET_DEPTH,
            raise: NET_RAISE,
            goal_depth: GOAL_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalieTuning {
    pub width: f32,
    pub height: f32,
    /// Units per tick
    pub speed: f32,
    pub margin: f32,
    pub reach_depth: f32,
}

impl Default for GoalieTuning {
    fn default() -> Self {
        Self {
            width: GOALIE_WIDTH,
            height: GOALIE_HEIGHT,
            speed: GOALIE_SPEED,
            margin: GOALIE_MARGIN,
            reach_depth: GOALIE_REACH_DEPTH,
        }
    }
}

/// Puck flight model (all rates are per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuckTuning {
    pub radius: f32,
    pub spot_inset: f32,
    pub gravity: f32,
    pub velocity_decay: f32,
    pub spin_decay: f32,
    pub power_per_unit: f32,
    pub max_power: f32,
    pub launch_scale: f32,
    pub spin_per_power: f32,
    pub depth_falloff: f32,
    pub min_depth_scale: f32,
    pub max_depth: f32,
}

impl Default for PuckTuning {
    fn default() -> Self {
        Self {
            radius: PUCK_RADIUS,
            spot_inset: PUCK_SPOT_INSET,
            gravity: GRAVITY,
            velocity_decay: VELOCITY_DECAY,
            spin_decay: SPIN_DECAY,
            power_per_unit: POWER_PER_UNIT,
            max_power: MAX_POWER,
            launch_scale: LAUNCH_SCALE,
            spin_per_power: SPIN_PER_POWER,
            depth_falloff: DEPTH_FALLOFF,
            min_depth_scale: MIN_DEPTH_SCALE,
            max_depth: MAX_DEPTH,
        }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field: FieldTuning,
    pub net: NetTuning,
    pub goalie: GoalieTuning,
    pub puck: PuckTuning,
    /// Outcome banner display time before the puck returns
    pub dwell_ms: u64,
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load tuning, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{e} ({}); using default tuning", path.display());
                Self::default()
            }
        }
    }

    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    /// Reject geometry the simulation cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field.width", self.field.width),
            ("field.height", self.field.height),
            ("net.width", self.net.width),
            ("net.height", self.net.height),
            ("goalie.width", self.goalie.width),
            ("goalie.height", self.goalie.height),
            ("puck.radius", self.puck.radius),
            ("puck.depth_falloff", self.puck.depth_falloff),
            ("puck.max_power", self.puck.max_power),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.goalie.reach_depth >= self.net.goal_depth {
            return Err(TuningError::Invalid(format!(
                "goalie.reach_depth ({}) must be below net.goal_depth ({})",
                self.goalie.reach_depth, self.net.goal_depth
            )));
        }

        if self.goalie.width + 2.0 * self.goalie.margin > self.net.width {
            return Err(TuningError::Invalid(
                "goalie plus margins does not fit inside the net".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.puck.min_depth_scale) {
            return Err(TuningError::Invalid(format!(
                "puck.min_depth_scale must be within [0, 1], got {}",
                self.puck.min_depth_scale
            )));
        }

        Ok(())
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field: FieldTuning::default(),
            net: NetTuning::default(),
            goalie: GoalieTuning::default(),
            puck: PuckTuning::default(),
            dwell_ms: OUTCOME_DWELL_MS,
        }
    }
}
