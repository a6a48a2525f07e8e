//! Idle/demo mode - a simple controller that plays the game
//!
//! Reads only the frame snapshot, so it can drive any host the same way a
//! human would: by sending jumps.

use crate::sim::{FrameSnapshot, GamePhase};
use crate::tuning::Tuning;

/// Keep the glider's bottom this far above the lower lip
const LIP_CLEARANCE: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Target center height while no pipe is ahead
    cruise_y: f32,
}

impl Autopilot {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            cruise_y: tuning.playfield_height as f32 / 2.0,
        }
    }

    /// Height the glider's center should stay at or above
    pub fn target_y(&self, frame: &FrameSnapshot) -> f32 {
        let player = &frame.player;
        frame
            .obstacles
            .iter()
            .find(|o| (o.left_x + o.width) as f32 >= player.x)
            .map(|o| o.gap_bottom_y as f32 - player.radius - LIP_CLEARANCE)
            .unwrap_or(self.cruise_y)
    }

    /// Jump once the glider sinks below the target and has stopped rising
    pub fn should_jump(&self, frame: &FrameSnapshot) -> bool {
        if frame.phase != GamePhase::Playing {
            return false;
        }
        let player = &frame.player;
        let center_y = player.y + player.radius;
        center_y > self.target_y(frame) && player.vel_y >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    fn play(seed: u64, ticks: u32) -> GameState {
        let mut state = GameState::new(seed);
        let pilot = Autopilot::new(state.tuning());
        for _ in 0..ticks {
            if pilot.should_jump(&state.snapshot()) {
                state.on_jump_command();
            }
            state.advance_one_tick();
            if !state.is_alive() {
                break;
            }
        }
        state
    }

    #[test]
    fn test_cruises_without_pipes() {
        let state = GameState::new(1);
        let pilot = Autopilot::new(state.tuning());
        let frame = state.snapshot();
        assert_eq!(pilot.target_y(&frame), 350.0);
        // Center starts exactly on the cruise line
        assert!(!pilot.should_jump(&frame));
    }

    #[test]
    fn test_never_jumps_on_crash_screen() {
        let mut state = GameState::new(1);
        while state.is_alive() {
            state.advance_one_tick();
        }
        let pilot = Autopilot::new(state.tuning());
        assert!(!pilot.should_jump(&state.snapshot()));
    }

    #[test]
    fn test_outlives_idle_player() {
        let mut idle = GameState::new(2024);
        while idle.is_alive() {
            idle.advance_one_tick();
        }

        let piloted = play(2024, 2000);
        assert!(piloted.elapsed_ticks() > idle.elapsed_ticks());
        assert!(piloted.current_score() >= 3);
    }
}
