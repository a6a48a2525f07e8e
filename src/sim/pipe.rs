//! Pipe geometry
//!
//! A pipe is an upper and a lower segment around an opening. The lips are
//! slanted so the opening pinches toward the pipe's midline:
//!
//! ```text
//!   TL \      / TR
//!        \  /
//!         TM          <- gap top (anchor)
//!
//!         BM          <- gap top + gap
//!        /  \
//!   BL /      \ BR
//! ```

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The six silhouette points of a pipe's opening (screen pixels, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeBounds {
    pub top_left: IVec2,
    pub top_mid: IVec2,
    pub top_right: IVec2,
    pub bottom_left: IVec2,
    pub bottom_mid: IVec2,
    pub bottom_right: IVec2,
}

/// A pipe obstacle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge
    pub x: i32,
    /// Height of the opening's upper tip, chosen at spawn
    pub gap_top: i32,
    pub width: i32,
    pub gap: i32,
    pub slant: i32,
}

impl Pipe {
    pub fn new(id: u32, x: i32, gap_top: i32, tuning: &Tuning) -> Self {
        Self {
            id,
            x,
            gap_top,
            width: tuning.pipe_width,
            gap: tuning.pipe_gap,
            slant: tuning.pipe_slant,
        }
    }

    /// Scroll left by the current speed
    #[inline]
    pub fn tick(&mut self, scroll_speed: i32) {
        self.x -= scroll_speed;
    }

    #[inline]
    pub fn gap_bottom(&self) -> i32 {
        self.gap_top + self.gap
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Fully past the left edge of the playfield
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0
    }

    pub fn bounds(&self) -> PipeBounds {
        let mid = self.x + self.width / 2;
        let right = self.right();
        let top = self.gap_top;
        let bottom = self.gap_bottom();

        PipeBounds {
            top_left: IVec2::new(self.x, top - self.slant),
            top_mid: IVec2::new(mid, top),
            top_right: IVec2::new(right, top - self.slant),
            bottom_left: IVec2::new(self.x, bottom + self.slant),
            bottom_mid: IVec2::new(mid, bottom),
            bottom_right: IVec2::new(right, bottom + self.slant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_shape() {
        let tuning = Tuning::default();
        let pipe = Pipe::new(1, 400, 250, &tuning);
        let b = pipe.bounds();

        assert_eq!(b.top_left, IVec2::new(400, 225));
        assert_eq!(b.top_mid, IVec2::new(450, 250));
        assert_eq!(b.top_right, IVec2::new(500, 225));
        assert_eq!(b.bottom_left, IVec2::new(400, 475));
        assert_eq!(b.bottom_mid, IVec2::new(450, 450));
        assert_eq!(b.bottom_right, IVec2::new(500, 475));
    }

    #[test]
    fn test_gap_accessors() {
        let tuning = Tuning::default();
        let pipe = Pipe::new(1, 0, 100, &tuning);
        assert_eq!(pipe.gap_bottom(), 300);
    }

    #[test]
    fn test_tick_and_off_screen() {
        let tuning = Tuning::default();
        let mut pipe = Pipe::new(1, 7, 100, &tuning);
        pipe.tick(5);
        assert_eq!(pipe.x, 2);
        assert!(!pipe.is_off_screen());

        pipe.x = -tuning.pipe_width + 1;
        assert!(!pipe.is_off_screen());
        pipe.tick(1);
        assert!(pipe.is_off_screen());
    }
}
