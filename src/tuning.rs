//! Data-driven game balance
//!
//! Every constant the simulation reads lives here. Defaults mirror
//! [`crate::consts`]; a host may override any subset from JSON.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a tuning file was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuningError {
    /// The JSON could not be parsed
    Parse(String),
    /// A field holds a value the simulation cannot run with
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "tuning parse error: {msg}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {}

/// Simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: i32,
    pub playfield_height: i32,

    // === Spawner ===
    /// Max change of the opening height between consecutive pipes
    pub max_pipe_jump: i32,
    /// Screen distance between spawns
    pub dist_next_pipe: i32,
    pub pipe_margin: i32,

    // === Pipes ===
    pub pipe_width: i32,
    pub pipe_gap: i32,
    pub pipe_slant: i32,

    // === Player ===
    pub player_x: f32,
    pub player_start_y: f32,
    /// Sprite box edge; the hitbox radius is half of it
    pub player_size: f32,
    pub gravity: f32,
    pub jump_velocity: f32,

    // === Clouds ===
    pub cloud_y: i32,
    pub cloud_base_width: i32,
    pub cloud_max_speed_class: u8,
    pub cloud_max_scale_class: u8,

    // === Scoring ===
    pub ticks_per_point: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            max_pipe_jump: MAX_PIPE_JUMP,
            dist_next_pipe: DIST_NEXT_PIPE,
            pipe_margin: PIPE_MARGIN,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_slant: PIPE_SLANT,

            player_x: PLAYER_X,
            player_start_y: PLAYER_START_Y,
            player_size: PLAYER_SIZE,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            cloud_y: CLOUD_Y,
            cloud_base_width: CLOUD_BASE_WIDTH,
            cloud_max_speed_class: CLOUD_MAX_SPEED_CLASS,
            cloud_max_scale_class: CLOUD_MAX_SCALE_CLASS,

            ticks_per_point: TICKS_PER_POINT,
        }
    }
}

impl Tuning {
    /// Hitbox radius derived from the sprite size
    #[inline]
    pub fn player_radius(&self) -> f32 {
        self.player_size / 2.0
    }

    /// Parse and validate a JSON tuning document (missing fields keep defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the values the simulation divides by or draws ranges from
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
            TuningError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.playfield_width <= 0 || self.playfield_height <= 0 {
            return Err(invalid("playfield", "dimensions must be positive"));
        }
        // Slope of the lip is taken between the left corner and the midline
        if self.pipe_width < 2 {
            return Err(invalid("pipe_width", "must be at least 2"));
        }
        if self.pipe_gap <= 0 {
            return Err(invalid("pipe_gap", "must be positive"));
        }
        if self.pipe_slant < 0 {
            return Err(invalid("pipe_slant", "must not be negative"));
        }
        if self.max_pipe_jump < 0 || self.pipe_margin < 0 {
            return Err(invalid("max_pipe_jump", "jump and margin must not be negative"));
        }
        if self.pipe_margin > self.playfield_height - self.pipe_margin - self.pipe_gap {
            return Err(invalid("pipe_gap", "opening does not fit between the margins"));
        }
        // First pipe draws from [max_pipe_jump, H - max_pipe_jump - pipe_gap]
        if 2 * self.max_pipe_jump + self.pipe_gap > self.playfield_height {
            return Err(invalid("max_pipe_jump", "first opening range is empty"));
        }
        if self.dist_next_pipe <= 0 {
            return Err(invalid("dist_next_pipe", "must be positive"));
        }
        if self.ticks_per_point == 0 {
            return Err(invalid("ticks_per_point", "must be non-zero"));
        }
        for (field, value) in [
            ("player_x", self.player_x),
            ("player_start_y", self.player_start_y),
            ("player_size", self.player_size),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        if self.player_size <= 0.0 {
            return Err(invalid("player_size", "must be positive"));
        }
        if self.cloud_max_speed_class == 0 || self.cloud_max_scale_class == 0 {
            return Err(invalid("cloud_max_speed_class", "cloud classes start at 1"));
        }
        Ok(())
    }

    /// Load from a JSON file, falling back to defaults when it is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No tuning at {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
