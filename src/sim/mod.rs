//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod ai;
pub mod collision;
pub mod entities;
pub mod physics;
pub mod state;
pub mod tick;

pub use ai::AiProfile;
pub use collision::{ball_hits_paddle, circle_rect_overlap};
pub use entities::{Ball, Paddle, Side};
pub use physics::BallEvent;
pub use state::{Difficulty, MatchState, Phase, Winner};
pub use tick::{InputEvent, Key, TickInput, tick};
