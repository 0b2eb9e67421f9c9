//! Match state and core simulation types
//!
//! Everything the phase handlers mutate lives in one owned aggregate; there
//! are no process-scoped globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entities::{Ball, Paddle, Side};
use crate::consts::*;

/// Difficulty selected in the menu; fixed for the rest of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Horizontal ball speed magnitude after every reset (px/tick)
    pub fn base_speed(self) -> i32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Difficulty selection menu
    MenuSelect,
    /// 3-2-1-GO! countdown before play starts
    Countdown,
    /// Active gameplay
    Playing,
    /// Frozen; scores, positions, and the match clock are untouched
    Paused,
    /// Match over, winner shown
    Ended,
    /// Absorbing; the process is about to exit
    Terminated,
}

/// Outcome shown on the end screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Ai,
    Draw,
}

/// Complete match state, passed explicitly to every phase handler
#[derive(Debug, Clone)]
pub struct MatchState {
    pub difficulty: Difficulty,
    pub phase: Phase,
    /// Left (human) paddle
    pub player: Paddle,
    /// Right (AI) paddle
    pub ai: Paddle,
    pub ball: Ball,
    /// (left, right) = (player, AI); monotonically non-decreasing
    pub score: (u32, u32),
    /// Ticks spent in `Countdown`
    pub countdown_ticks: u32,
    /// Ticks spent in `Playing`; drives the match clock, so pausing
    /// freezes the timer
    pub play_ticks: u64,
    /// Music muted by the player; never affects simulation
    pub muted: bool,
    /// Seeded RNG for deflections and serves
    pub rng: Pcg32,
}

impl MatchState {
    /// Fresh match in the menu phase
    pub fn new(seed: u64) -> Self {
        Self {
            difficulty: Difficulty::Medium,
            phase: Phase::MenuSelect,
            player: Paddle::new(PLAYER_X),
            ai: Paddle::new(AI_X),
            ball: Ball::new(),
            score: (0, 0),
            countdown_ticks: 0,
            play_ticks: 0,
            muted: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Lock in a difficulty and move to the countdown
    ///
    /// The opening serve always travels toward the AI side.
    pub fn start(&mut self, difficulty: Difficulty) {
        debug_assert_eq!(self.phase, Phase::MenuSelect);
        self.difficulty = difficulty;
        let base_speed = difficulty.base_speed();
        self.ball.reset(Side::Right, base_speed, &mut self.rng);
        self.countdown_ticks = 0;
        self.phase = Phase::Countdown;
    }

    pub fn base_speed(&self) -> i32 {
        self.difficulty.base_speed()
    }

    /// Record a point; scores only ever go up
    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Left => self.score.0 += 1,
            Side::Right => self.score.1 += 1,
        }
    }

    /// Whole seconds of play time elapsed
    pub fn elapsed_secs(&self) -> u64 {
        self.play_ticks / ACTIVE_TICK_HZ as u64
    }

    /// Seconds remaining on the match clock
    pub fn time_left_secs(&self) -> u64 {
        TIME_LIMIT_SECS.saturating_sub(self.elapsed_secs())
    }

    /// Label shown for the current countdown step
    pub fn countdown_label(&self) -> &'static str {
        match self.countdown_ticks / COUNTDOWN_STEP_TICKS {
            0 => "3",
            1 => "2",
            2 => "1",
            _ => "GO!",
        }
    }

    /// Winner by final score
    pub fn winner(&self) -> Winner {
        use std::cmp::Ordering;
        match self.score.0.cmp(&self.score.1) {
            Ordering::Greater => Winner::Player,
            Ordering::Less => Winner::Ai,
            Ordering::Equal => Winner::Draw,
        }
    }
}
