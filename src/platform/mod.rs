//! Platform abstraction layer
//!
//! Host-side plumbing between a real clock/input source and the simulation:
//! - Input commands queued by the host, drained by the single state owner
//! - Fixed-timestep accumulator turning frame deltas into ticks

use std::collections::VecDeque;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{Command, Flow, GameState};

/// Longest frame delta accepted, so a stalled host doesn't fast-forward
const MAX_FRAME_DT: f32 = 0.1;

/// Commands waiting to be applied at the start of the next frame
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending command in arrival order. Stops at a quit.
    pub fn drain_into(&mut self, state: &mut GameState) -> Flow {
        while let Some(command) = self.pending.pop_front() {
            if state.apply(command) == Flow::Quit {
                self.pending.clear();
                return Flow::Quit;
            }
        }
        Flow::Continue
    }
}

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Add a frame's wall-clock delta and return how many ticks to run.
    /// A non-finite delta counts as no time passing.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() {
            self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        }

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        substeps
    }
}

/// One host frame: apply queued input, then run the ticks the clock owes
pub fn run_frame(
    state: &mut GameState,
    queue: &mut CommandQueue,
    clock: &mut FixedStep,
    frame_dt: f32,
) -> Flow {
    if queue.drain_into(state) == Flow::Quit {
        return Flow::Quit;
    }
    for _ in 0..clock.advance(frame_dt) {
        state.advance_one_tick();
    }
    Flow::Continue
}
