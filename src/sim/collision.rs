//! Exact ball/paddle overlap testing
//!
//! The ball sprite is a circle inscribed in its bounding box and paddles are
//! solid rectangles, so "do any opaque pixels coincide" reduces to strict
//! circle-vs-rectangle overlap. Corner-adjacent bounding boxes whose circle
//! never enters the rectangle must not count as a hit.

use glam::IVec2;

use super::entities::{Ball, Paddle};
use crate::consts::{PADDLE_H, PADDLE_W};

/// Strict overlap between a circle and an axis-aligned rectangle
///
/// Tangency (distance exactly equal to the radius) is a miss: two shapes
/// that merely touch share no interior pixels.
pub fn circle_rect_overlap(center: IVec2, radius: i32, rect_pos: IVec2, w: i32, h: i32) -> bool {
    let closest = IVec2::new(
        center.x.clamp(rect_pos.x, rect_pos.x + w),
        center.y.clamp(rect_pos.y, rect_pos.y + h),
    );
    let d = center - closest;
    d.x * d.x + d.y * d.y < radius * radius
}

/// Does the ball overlap the paddle?
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    circle_rect_overlap(ball.center(), Ball::RADIUS, paddle.pos, PADDLE_W, PADDLE_H)
}
