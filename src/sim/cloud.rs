//! Background clouds (cosmetic only, never collide)

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: i32,
    pub y: i32,
    /// Pixels per tick
    pub speed_class: u8,
    /// Sprite scale multiplier
    pub scale_class: u8,
    base_width: i32,
}

impl Cloud {
    pub fn new(speed_class: u8, scale_class: u8, tuning: &Tuning) -> Self {
        Self {
            x: tuning.playfield_width,
            y: tuning.cloud_y,
            speed_class,
            scale_class,
            base_width: tuning.cloud_base_width,
        }
    }

    #[inline]
    pub fn tick(&mut self) {
        self.x -= i32::from(self.speed_class);
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.base_width * i32::from(self.scale_class)
    }

    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width() <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enters_at_right_edge() {
        let tuning = Tuning::default();
        let cloud = Cloud::new(2, 3, &tuning);
        assert_eq!(cloud.x, tuning.playfield_width);
        assert_eq!(cloud.y, tuning.cloud_y);
        assert_eq!(cloud.width(), 3 * tuning.cloud_base_width);
    }

    #[test]
    fn test_scrolls_by_own_speed() {
        let tuning = Tuning::default();
        let mut slow = Cloud::new(1, 1, &tuning);
        let mut fast = Cloud::new(2, 1, &tuning);
        for _ in 0..10 {
            slow.tick();
            fast.tick();
        }
        assert_eq!(slow.x, tuning.playfield_width - 10);
        assert_eq!(fast.x, tuning.playfield_width - 20);
    }

    #[test]
    fn test_off_screen_uses_scaled_width() {
        let tuning = Tuning::default();
        let mut cloud = Cloud::new(1, 2, &tuning);
        cloud.x = -cloud.width() + 1;
        assert!(!cloud.is_off_screen());
        cloud.tick();
        assert!(cloud.is_off_screen());
    }
}
