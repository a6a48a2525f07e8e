//! Collision detection between the circular glider and a pipe's slanted lips
//!
//! The circle is reduced to a box whose corners are the two points where the
//! circle's tangent runs parallel to the upper lip. The box is then treated as
//! axis-aligned (min/max of the two points), which is an approximation of a
//! rotated rectangle and can miss grazing contacts near steep lips.

use glam::{IVec2, Vec2};

use super::pipe::PipeBounds;

/// Which part of the pipe was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeHit {
    /// Glider straddles the midline and reaches the lower lip tip
    BottomLip,
    /// Glider straddles the midline and reaches the upper lip tip
    TopLip,
    /// Glider's right edge crosses the slanted lips on the pipe's left half
    LeadingFace,
    /// Glider's left edge crosses the slanted lips on the pipe's right half
    TrailingFace,
}

/// The glider's hitbox corners, truncated to whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerBox {
    pub top_left: IVec2,
    pub top_right: IVec2,
    pub bottom_left: IVec2,
    pub bottom_right: IVec2,
}

impl PlayerBox {
    /// Build the box around a circle for a lip of slope `m`.
    ///
    /// Solves `-dx/dy = m` (offset perpendicular to the lip) together with
    /// `dx² + dy² = r²`, giving the two opposite corners `±(-dy·m, dy)`.
    pub fn around(center: Vec2, radius: f32, m: f32) -> Self {
        let dy = (radius * radius / (m * m + 1.0)).sqrt();
        let a = center + Vec2::new(-dy * m, dy);
        let b = center + Vec2::new(dy * m, -dy);

        let min = a.min(b);
        let max = a.max(b);
        let (x0, y0) = (min.x as i32, min.y as i32);
        let (x1, y1) = (max.x as i32, max.y as i32);

        Self {
            top_left: IVec2::new(x0, y0),
            top_right: IVec2::new(x1, y0),
            bottom_left: IVec2::new(x0, y1),
            bottom_right: IVec2::new(x1, y1),
        }
    }
}

/// Slope of the segment through `a` and `b`
#[inline]
fn slope(a: IVec2, b: IVec2) -> f32 {
    (a.y - b.y) as f32 / (a.x - b.x) as f32
}

/// Height of the line through `a` and `b` at `x`
#[inline]
fn lip_height(a: IVec2, b: IVec2, x: i32) -> f32 {
    slope(a, b) * (x - b.x) as f32 + b.y as f32
}

/// Check the glider's circular hitbox against one pipe
pub fn check_pipe_collision(center: Vec2, radius: f32, bounds: &PipeBounds) -> Option<PipeHit> {
    let PipeBounds {
        top_left: tl,
        top_mid: tm,
        top_right: tr,
        bottom_left: bl,
        bottom_mid: bm,
        bottom_right: br,
    } = *bounds;

    let pb = PlayerBox::around(center, radius, slope(tl, tm));

    let tl_tm = lip_height(tl, tm, pb.top_right.x);
    let tm_tr = lip_height(tm, tr, pb.top_left.x);
    let bl_bm = lip_height(bl, bm, pb.bottom_right.x);
    let bm_br = lip_height(bm, br, pb.bottom_left.x);

    let in_range = pb.top_left.x <= tm.x
        && pb.top_left.x >= tl.x
        && pb.top_right.x >= tm.x
        && pb.top_right.x <= tr.x;

    if in_range && pb.bottom_left.y >= bm.y && pb.bottom_right.y >= bm.y {
        return Some(PipeHit::BottomLip);
    }
    if in_range && pb.top_left.y <= tm.y && pb.top_right.y <= tm.y {
        return Some(PipeHit::TopLip);
    }
    if pb.top_right.x >= tl.x
        && pb.top_right.x <= tm.x
        && (pb.top_right.y as f32 <= tl_tm || pb.bottom_right.y as f32 >= bl_bm)
    {
        return Some(PipeHit::LeadingFace);
    }
    if pb.top_left.x <= tr.x
        && pb.top_left.x >= tm.x
        && (pb.top_left.y as f32 <= tm_tr || pb.bottom_left.y as f32 >= bm_br)
    {
        return Some(PipeHit::TrailingFace);
    }

    None
}
