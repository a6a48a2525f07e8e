//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod cloud;
pub mod collision;
pub mod pipe;
pub mod player;
pub mod state;
pub mod tick;

pub use cloud::Cloud;
pub use collision::{PipeHit, PlayerBox, check_pipe_collision};
pub use pipe::{Pipe, PipeBounds};
pub use player::Player;
pub use state::{
    Command, DecorationSnapshot, Flow, FrameSnapshot, GamePhase, GameState, ObstacleSnapshot,
    PlayerSnapshot,
};
pub use tick::{next_gap_range, tick};
