//! Declarative frame description
//!
//! The core snapshots its state into a `Scene` once per tick; frontends are
//! responsible for pixels (or terminal cells). Nothing here knows how it
//! will be drawn.

use glam::IVec2;

use crate::consts::*;
use crate::sim::{MatchState, Phase, Winner};

/// A filled rectangle in playfield pixels
#[derive(Debug, Clone, Copy)]
pub struct SpriteRect {
    pub pos: IVec2,
    pub w: i32,
    pub h: i32,
    /// Briefly set after a bounce so frontends can highlight the sprite
    pub flash: bool,
}

/// Full-screen overlay for the non-playing phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Title and difficulty menu
    Menu,
    /// Large countdown step label
    Countdown { label: &'static str },
    Paused,
    /// Winner banner
    Ended { winner: Winner },
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone)]
pub struct Scene {
    /// Sprites in draw order; empty when an overlay covers the field
    pub sprites: Vec<SpriteRect>,
    /// (player, AI)
    pub score: (u32, u32),
    pub time_left_secs: u64,
    pub muted: bool,
    pub overlay: Option<Overlay>,
    pub fps: Option<u32>,
}

impl Scene {
    /// Snapshot the current match state into draw commands
    pub fn from_state(state: &MatchState, fps: Option<u32>) -> Self {
        let overlay = match state.phase {
            Phase::MenuSelect => Some(Overlay::Menu),
            Phase::Countdown => Some(Overlay::Countdown {
                label: state.countdown_label(),
            }),
            Phase::Paused => Some(Overlay::Paused),
            Phase::Ended => Some(Overlay::Ended {
                winner: state.winner(),
            }),
            Phase::Playing | Phase::Terminated => None,
        };

        let sprites = if overlay.is_some() {
            Vec::new()
        } else {
            vec![
                SpriteRect {
                    pos: state.player.pos,
                    w: PADDLE_W,
                    h: PADDLE_H,
                    flash: false,
                },
                SpriteRect {
                    pos: state.ai.pos,
                    w: PADDLE_W,
                    h: PADDLE_H,
                    flash: false,
                },
                SpriteRect {
                    pos: state.ball.pos,
                    w: BALL_SIZE,
                    h: BALL_SIZE,
                    flash: state.ball.flash > 0,
                },
            ]
        };

        Self {
            sprites,
            score: state.score,
            time_left_secs: state.time_left_secs(),
            muted: state.muted,
            overlay,
            fps,
        }
    }
}
