//! Game state, command interface and render snapshots
//!
//! `GameState` exclusively owns the player, the pipes and the clouds. Hosts
//! drive it through the command methods and read it through owned snapshots.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cloud::Cloud;
use super::pipe::{Pipe, PipeBounds};
use super::player::Player;
use super::tick::tick;
use crate::consts::INITIAL_SCROLL_SPEED;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Crashed; frozen until restart or quit
    DeadAwaitingInput,
}

/// Discrete input from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Jump,
    Restart,
    Quit,
}

/// What the host should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flow {
    Continue,
    Quit,
}

/// Player as seen by a renderer. `x`/`y` is the sprite's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub vel_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleSnapshot {
    pub id: u32,
    pub left_x: i32,
    pub width: i32,
    pub gap_top_y: i32,
    pub gap_bottom_y: i32,
    pub bounds: PipeBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationSnapshot {
    pub x: i32,
    pub y: i32,
    pub speed_class: u8,
    pub scale_class: u8,
}

/// Everything a presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub elapsed_ticks: u64,
    pub scroll_speed: i32,
    pub score: u64,
    pub high_score: u64,
    /// The last crash set a new session high score
    pub new_high_score: bool,
    /// False until the first jump (show the "press to jump" prompt)
    pub has_jumped: bool,
    pub player: PlayerSnapshot,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub decorations: Vec<DecorationSnapshot>,
}

/// Complete simulation state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) tuning: Tuning,
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) phase: GamePhase,
    /// Ticks played since start or last restart
    pub(crate) elapsed_ticks: u64,
    pub(crate) last_spawn_tick: u64,
    /// Pixels per tick, grows with elapsed time
    pub(crate) scroll_speed: i32,
    pub(crate) player: Player,
    /// Oldest (leftmost) first
    pub(crate) pipes: VecDeque<Pipe>,
    /// Oldest (leftmost) first
    pub(crate) clouds: VecDeque<Cloud>,
    pub(crate) high_score: u64,
    pub(crate) new_high_score: bool,
    pub(crate) has_jumped: bool,
    next_id: u32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        let player = Player::new(&tuning);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::Playing,
            elapsed_ticks: 0,
            last_spawn_tick: 0,
            scroll_speed: INITIAL_SCROLL_SPEED,
            player,
            pipes: VecDeque::new(),
            clouds: VecDeque::new(),
            high_score: 0,
            new_high_score: false,
            has_jumped: false,
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // === Commands ===

    /// Advance exactly one fixed timestep
    pub fn advance_one_tick(&mut self) {
        tick(self);
    }

    /// Jump immediately, regardless of tick boundaries
    pub fn on_jump_command(&mut self) {
        self.player.jump();
        self.has_jumped = true;
    }

    /// Start over after a crash. Ignored while playing.
    pub fn on_restart_command(&mut self) {
        if self.phase != GamePhase::DeadAwaitingInput {
            return;
        }

        self.pipes.clear();
        self.player.reset();
        self.elapsed_ticks = 0;
        self.last_spawn_tick = 0;
        self.scroll_speed = INITIAL_SCROLL_SPEED;
        self.new_high_score = false;
        self.phase = GamePhase::Playing;
        log::info!("Game restarted (high score {})", self.high_score);
    }

    /// Ask to quit. Only honored from the crash screen.
    pub fn on_quit_command(&mut self) -> Flow {
        match self.phase {
            GamePhase::DeadAwaitingInput => {
                log::info!("Quit requested");
                Flow::Quit
            }
            GamePhase::Playing => Flow::Continue,
        }
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Jump => {
                self.on_jump_command();
                Flow::Continue
            }
            Command::Restart => {
                self.on_restart_command();
                Flow::Continue
            }
            Command::Quit => self.on_quit_command(),
        }
    }

    /// Freeze the run and record the score
    pub(crate) fn enter_game_over(&mut self) {
        let score = self.current_score();
        self.new_high_score = score > self.high_score;
        if self.new_high_score {
            self.high_score = score;
        }
        self.phase = GamePhase::DeadAwaitingInput;
        log::info!(
            "Crashed at tick {} with score {} (high {}{})",
            self.elapsed_ticks,
            score,
            self.high_score,
            if self.new_high_score { ", new" } else { "" }
        );
    }

    // === Queries ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_alive(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn awaiting_restart(&self) -> bool {
        self.phase == GamePhase::DeadAwaitingInput
    }

    pub fn current_score(&self) -> u64 {
        self.elapsed_ticks / self.tuning.ticks_per_point
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn has_jumped(&self) -> bool {
        self.has_jumped
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn scroll_speed(&self) -> i32 {
        self.scroll_speed
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    // === Snapshots ===

    pub fn player_state(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            x: self.player.pos.x,
            y: self.player.pos.y,
            radius: self.player.radius(),
            vel_y: self.player.vel_y,
        }
    }

    pub fn obstacles(&self) -> Vec<ObstacleSnapshot> {
        self.pipes
            .iter()
            .map(|p| ObstacleSnapshot {
                id: p.id,
                left_x: p.x,
                width: p.width,
                gap_top_y: p.gap_top,
                gap_bottom_y: p.gap_bottom(),
                bounds: p.bounds(),
            })
            .collect()
    }

    pub fn decorations(&self) -> Vec<DecorationSnapshot> {
        self.clouds
            .iter()
            .map(|c| DecorationSnapshot {
                x: c.x,
                y: c.y,
                speed_class: c.speed_class,
                scale_class: c.scale_class,
            })
            .collect()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            elapsed_ticks: self.elapsed_ticks,
            scroll_speed: self.scroll_speed,
            score: self.current_score(),
            high_score: self.high_score,
            new_high_score: self.new_high_score,
            has_jumped: self.has_jumped,
            player: self.player_state(),
            obstacles: self.obstacles(),
            decorations: self.decorations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new(12345);
        let tuning = Tuning::default();

        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(state.is_alive());
        assert!(!state.awaiting_restart());
        assert_eq!(state.current_score(), 0);
        assert_eq!(state.high_score(), 0);
        assert_eq!(state.scroll_speed(), INITIAL_SCROLL_SPEED);
        assert!(state.obstacles().is_empty());
        assert!(state.decorations().is_empty());
        assert!(!state.has_jumped());

        let player = state.player_state();
        assert_eq!(player.x, tuning.player_x);
        assert_eq!(player.y, tuning.player_start_y);
        assert_eq!(player.radius, 25.0);
    }

    #[test]
    fn test_jump_command_sets_velocity() {
        let mut state = GameState::new(1);
        state.player.vel_y = 30.0;
        state.on_jump_command();
        assert_eq!(state.player_state().vel_y, state.tuning().jump_velocity);
        assert!(state.has_jumped());

        state.player.vel_y = -50.0;
        assert_eq!(state.apply(Command::Jump), Flow::Continue);
        assert_eq!(state.player_state().vel_y, state.tuning().jump_velocity);
    }

    #[test]
    fn test_restart_and_quit_ignored_while_playing() {
        let mut state = GameState::new(1);
        for _ in 0..10 {
            state.advance_one_tick();
        }
        let before = state.snapshot();

        state.on_restart_command();
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.on_quit_command(), Flow::Continue);
        assert_eq!(state.apply(Command::Quit), Flow::Continue);
        assert!(state.is_alive());
    }

    #[test]
    fn test_quit_from_crash_screen() {
        let mut state = GameState::new(1);
        state.enter_game_over();
        assert_eq!(state.apply(Command::Quit), Flow::Quit);
    }

    #[test]
    fn test_high_score_only_rises() {
        let mut state = GameState::new(1);

        state.elapsed_ticks = 512;
        state.enter_game_over();
        assert_eq!(state.high_score(), 5);
        assert!(state.new_high_score());

        state.on_restart_command();
        assert!(!state.new_high_score());
        state.elapsed_ticks = 250;
        state.enter_game_over();
        assert_eq!(state.high_score(), 5);
        assert!(!state.new_high_score());
        assert_eq!(state.current_score(), 2);
    }

    #[test]
    fn test_snapshots_are_idempotent() {
        let mut state = GameState::new(77);
        for _ in 0..150 {
            state.advance_one_tick();
        }
        assert_eq!(state.player_state(), state.player_state());
        assert_eq!(state.obstacles(), state.obstacles());
        assert_eq!(state.decorations(), state.decorations());
        assert_eq!(state.snapshot(), state.snapshot());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(3);
        for _ in 0..70 {
            state.advance_one_tick();
        }
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state.snapshot());
    }
}
