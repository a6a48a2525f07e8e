//! Pipe Glider - A side-scrolling pipe-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `platform`: Host-side input commands and fixed-timestep scheduling
//! - `autopilot`: Idle/demo controller driven by frame snapshots
//! - `tuning`: Data-driven game balance

pub mod autopilot;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// These are the built-in defaults; `Tuning::default()` mirrors them.
pub mod consts {
    /// Fixed simulation timestep (one tick every 25 ms)
    pub const SIM_DT: f32 = 0.025;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: i32 = 1000;
    pub const PLAYFIELD_HEIGHT: i32 = 700;

    /// Max distance between consecutive pipe openings
    pub const MAX_PIPE_JUMP: i32 = 150;
    /// Screen distance between pipe spawns
    pub const DIST_NEXT_PIPE: i32 = 340;
    /// Scroll speed grows by one every this many ticks
    pub const TICKS_SPEED_INCREASE: u64 = 200;
    /// Starting scroll speed (pixels per tick, leftwards)
    pub const INITIAL_SCROLL_SPEED: i32 = 5;
    /// Openings never come closer than this to the top or bottom edge
    pub const PIPE_MARGIN: i32 = 30;

    /// Pipe defaults
    pub const PIPE_WIDTH: i32 = 100;
    pub const PIPE_GAP: i32 = 200;
    /// How far the lip corners sit back from the lip tip
    pub const PIPE_SLANT: i32 = 25;

    /// Player defaults - top-left of the sprite box, hitbox is the inscribed circle
    pub const PLAYER_X: f32 = 200.0;
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = (PLAYFIELD_HEIGHT as f32 - PLAYER_SIZE) / 2.0;
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 1.0;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_VELOCITY: f32 = -12.0;

    /// Cloud defaults
    pub const CLOUD_Y: i32 = 50;
    pub const CLOUD_BASE_WIDTH: i32 = 60;
    pub const CLOUD_MAX_SPEED_CLASS: u8 = 2;
    pub const CLOUD_MAX_SCALE_CLASS: u8 = 5;

    /// Elapsed ticks per score point
    pub const TICKS_PER_POINT: u64 = 100;
}
