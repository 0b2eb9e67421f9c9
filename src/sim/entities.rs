//! Paddle and ball entities
//!
//! Pure state holders with movement and bounce rules. Randomized deflections
//! take the RNG as a parameter so callers stay in control of determinism.

use glam::IVec2;
use rand::Rng;

use crate::consts::*;

/// Which side of the field an entity or player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A paddle, positioned by its top-left corner
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: IVec2,
}

impl Paddle {
    /// Create a paddle vertically centered at the given x
    pub fn new(x: i32) -> Self {
        Self {
            pos: IVec2::new(x, (SCREEN_H - PADDLE_H) / 2),
        }
    }

    /// Shift up by `speed` pixels, clamped to the screen
    pub fn move_up(&mut self, speed: i32) {
        self.pos.y = (self.pos.y - speed).clamp(0, SCREEN_H - PADDLE_H);
    }

    /// Shift down by `speed` pixels, clamped to the screen
    pub fn move_down(&mut self, speed: i32) {
        self.pos.y = (self.pos.y + speed).clamp(0, SCREEN_H - PADDLE_H);
    }

    /// Vertical center, used by the AI tracker
    pub fn center_y(&self) -> i32 {
        self.pos.y + PADDLE_H / 2
    }
}

/// The ball, positioned by its top-left corner
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: IVec2,
    /// Velocity in pixels per tick
    pub vel: IVec2,
    /// Ticks remaining of the post-bounce highlight (visual only)
    pub flash: u8,
}

impl Ball {
    pub const RADIUS: i32 = BALL_SIZE / 2;

    /// Create a ball resting at the screen center
    pub fn new() -> Self {
        Self {
            pos: Self::center_pos(),
            vel: IVec2::ZERO,
            flash: 0,
        }
    }

    /// Top-left position that centers the ball on screen
    fn center_pos() -> IVec2 {
        IVec2::new((SCREEN_W - BALL_SIZE) / 2, (SCREEN_H - BALL_SIZE) / 2)
    }

    /// Center of the ball sprite
    pub fn center(&self) -> IVec2 {
        self.pos + IVec2::splat(BALL_SIZE / 2)
    }

    /// One integer pixel step along the current velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Reverse horizontal direction and re-roll the vertical deflection
    ///
    /// The new vertical speed is independent of the incoming one; this is a
    /// randomized deflection angle, not an elastic reflection.
    pub fn bounce_off_paddle(&mut self, rng: &mut impl Rng) {
        self.vel.x = -self.vel.x;
        self.vel.y = rng.random_range(-DEFLECT_MAX..=DEFLECT_MAX);
        self.flash = FLASH_TICKS;
    }

    /// Reverse vertical direction only
    pub fn bounce_off_wall(&mut self) {
        self.vel.y = -self.vel.y;
        self.flash = FLASH_TICKS;
    }

    /// Recenter and serve toward the side that was scored on
    pub fn reset(&mut self, toward: Side, base_speed: i32, rng: &mut impl Rng) {
        debug_assert!(base_speed > 0, "base speed must be positive");
        self.pos = Self::center_pos();
        self.vel.x = match toward {
            Side::Left => -base_speed,
            Side::Right => base_speed,
        };
        self.vel.y = rng.random_range(-base_speed..=base_speed);
        self.flash = 0;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}
