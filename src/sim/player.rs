//! The player-controlled glider

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The glider. `pos` is the top-left of its sprite box; x never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (pixels/tick, positive = downward)
    pub vel_y: f32,
    start: Vec2,
    radius: f32,
    gravity: f32,
    jump_velocity: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let start = Vec2::new(tuning.player_x, tuning.player_start_y);
        Self {
            pos: start,
            vel_y: 0.0,
            start,
            radius: tuning.player_radius(),
            gravity: tuning.gravity,
            jump_velocity: tuning.jump_velocity,
        }
    }

    /// Apply gravity, then integrate velocity. No bounds clamping.
    pub fn tick(&mut self) {
        self.vel_y += self.gravity;
        self.pos.y += self.vel_y;
    }

    /// Replace the current velocity with the jump impulse
    pub fn jump(&mut self) {
        self.vel_y = self.jump_velocity;
    }

    pub fn reset(&mut self) {
        self.pos = self.start;
        self.vel_y = 0.0;
    }

    /// Center of the circular hitbox
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_integrates_velocity_first() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let y0 = player.pos.y;

        player.tick();
        assert_eq!(player.vel_y, tuning.gravity);
        assert_eq!(player.pos.y, y0 + tuning.gravity);

        player.tick();
        assert_eq!(player.vel_y, 2.0 * tuning.gravity);
        assert_eq!(player.pos.y, y0 + 3.0 * tuning.gravity);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        for vel in [-40.0, -3.0, 0.0, 7.5, 60.0] {
            player.vel_y = vel;
            player.jump();
            assert_eq!(player.vel_y, tuning.jump_velocity);
        }

        // Repeated jumps do not stack
        player.jump();
        player.jump();
        assert_eq!(player.vel_y, tuning.jump_velocity);
    }

    #[test]
    fn test_x_is_fixed_and_no_clamp() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        for _ in 0..200 {
            player.tick();
        }
        assert_eq!(player.pos.x, tuning.player_x);
        assert!(player.pos.y > tuning.playfield_height as f32);
    }

    #[test]
    fn test_reset() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.jump();
        player.tick();
        player.reset();
        assert_eq!(player.pos, Vec2::new(tuning.player_x, tuning.player_start_y));
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_center_offsets_by_radius() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        assert_eq!(player.center(), player.pos + Vec2::splat(25.0));
        assert_eq!(player.radius(), 25.0);
    }
}
