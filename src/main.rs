//! Pipe Glider entry point
//!
//! Headless host: drives the simulation with a fixed-step clock and the
//! autopilot standing in for the keyboard, then prints a JSON run summary.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use pipe_glider::autopilot::Autopilot;
use pipe_glider::platform::{CommandQueue, FixedStep, run_frame};
use pipe_glider::sim::{Command, Flow, GameState};
use pipe_glider::tuning::Tuning;

/// Host frame rate (independent of the 40 Hz simulation)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Runs before the host quits from the crash screen
const RUNS: u32 = 3;
/// Give up on a run that lasts this many frames (10 simulated minutes)
const MAX_FRAMES_PER_RUN: u32 = 60 * 600;

#[derive(Debug, Serialize)]
struct RunSummary {
    run: u32,
    ticks: u64,
    score: u64,
    high_score: u64,
    new_high_score: bool,
    final_speed: i32,
    /// Stopped at the frame cap instead of crashing
    capped: bool,
}

impl RunSummary {
    fn record(run: usize, state: &GameState, capped: bool) -> Self {
        Self {
            run: run as u32,
            ticks: state.elapsed_ticks(),
            score: state.current_score(),
            high_score: state.high_score(),
            new_high_score: state.new_high_score(),
            final_speed: state.scroll_speed(),
            capped,
        }
    }
}

#[derive(Debug, Serialize)]
struct SessionSummary {
    seed: u64,
    runs: Vec<RunSummary>,
}

fn session_seed() -> u64 {
    if let Ok(raw) = std::env::var("PIPE_GLIDER_SEED") {
        match raw.parse() {
            Ok(seed) => return seed,
            Err(e) => log::warn!("Ignoring PIPE_GLIDER_SEED={raw:?}: {e}"),
        }
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Pipe Glider (headless) starting...");

    let tuning = Tuning::load_or_default(Path::new("tuning.json"));
    let seed = session_seed();
    log::info!("Game initialized with seed: {seed}");

    let pilot = Autopilot::new(&tuning);
    let mut state = GameState::with_tuning(tuning, seed);
    let mut queue = CommandQueue::new();
    let mut clock = FixedStep::default();
    let mut runs = Vec::new();
    let mut frames = 0;

    loop {
        if state.is_alive() {
            if pilot.should_jump(&state.snapshot()) {
                queue.push(Command::Jump);
            }
            frames += 1;
            if frames >= MAX_FRAMES_PER_RUN {
                log::warn!("Run {} hit the frame cap, stopping", runs.len() + 1);
                runs.push(RunSummary::record(runs.len() + 1, &state, true));
                break;
            }
        } else {
            runs.push(RunSummary::record(runs.len() + 1, &state, false));
            frames = 0;
            queue.push(if runs.len() as u32 >= RUNS {
                Command::Quit
            } else {
                Command::Restart
            });
        }

        if run_frame(&mut state, &mut queue, &mut clock, FRAME_DT) == Flow::Quit {
            break;
        }
    }

    let summary = SessionSummary { seed, runs };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode summary: {e}"),
    }
}
