//! Difficulty-driven paddle controller
//!
//! The AI tracks the ball only while it is moving toward it; a ball moving
//! away gives the human a reaction window after each return. Inside the
//! dead-zone margin the paddle holds still, so a larger margin reads as a
//! visibly clumsier opponent.

use super::entities::{Ball, Paddle};
use super::state::Difficulty;

/// Tracking parameters derived from the selected difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiProfile {
    /// Paddle speed in px/tick
    pub speed: i32,
    /// Dead-zone margin in px
    pub margin: i32,
}

impl AiProfile {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self { speed: 3, margin: 25 },
            Difficulty::Medium => Self { speed: 5, margin: 15 },
            Difficulty::Hard => Self { speed: 7, margin: 5 },
        }
    }
}

/// Move the AI paddle one tick toward the ball
///
/// Movement clamps to the screen via the paddle's own move ops.
pub fn drive(paddle: &mut Paddle, ball: &Ball, profile: AiProfile) {
    // Ignore a ball moving away or sitting still.
    if ball.vel.x <= 0 {
        return;
    }

    let target = ball.center().y;
    let center = paddle.center_y();
    if target > center + profile.margin {
        paddle.move_down(profile.speed);
    } else if target < center - profile.margin {
        paddle.move_up(profile.speed);
    }
}
