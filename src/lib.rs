//! Arcade Pong - a timed human-vs-AI table tennis match
//!
//! Core modules:
//! - `sim`: deterministic simulation (entities, physics, AI, match state machine)
//! - `scene`: declarative frame description handed to frontends
//! - `term`: crossterm terminal frontend
//! - `audio`: music playback with graceful degradation
//! - `settings`: user preferences

pub mod audio;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod term;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size in pixels
    pub const SCREEN_W: i32 = 700;
    pub const SCREEN_H: i32 = 500;

    /// Paddle geometry
    pub const PADDLE_W: i32 = 10;
    pub const PADDLE_H: i32 = 100;
    /// Left edge of the human paddle
    pub const PLAYER_X: i32 = 30;
    /// Left edge of the AI paddle
    pub const AI_X: i32 = SCREEN_W - 40;

    /// Ball bounding box; the sprite is a circle inscribed in it
    pub const BALL_SIZE: i32 = 20;

    /// Human paddle speed while W/S is held (px/tick)
    pub const PLAYER_SPEED: i32 = 6;

    /// Vertical deflection range after a paddle bounce (px/tick)
    pub const DEFLECT_MAX: i32 = 9;

    /// Match length in seconds of play time
    pub const TIME_LIMIT_SECS: u64 = 60;

    /// Tick rate during countdown and play
    pub const ACTIVE_TICK_HZ: u32 = 60;
    /// Tick rate on the menu, pause, and end screens
    pub const IDLE_TICK_HZ: u32 = 30;

    /// Ticks each countdown step ("3", "2", "1", "GO!") stays on screen
    pub const COUNTDOWN_STEP_TICKS: u32 = ACTIVE_TICK_HZ;
    /// Number of countdown steps before play begins
    pub const COUNTDOWN_STEPS: u32 = 4;

    /// Ticks the ball stays highlighted after a bounce
    pub const FLASH_TICKS: u8 = 6;
}
