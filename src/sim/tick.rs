//! Per-tick match state machine
//!
//! One call per fixed tick. All input for the tick arrives batched in a
//! `TickInput`, so control flow stays linear and every phase is testable
//! without a display. Quit and mute are cross-cutting: they work in every
//! phase, and mute never touches simulation state beyond the audio flag.

use super::ai::{self, AiProfile};
use super::physics::{self, BallEvent};
use super::state::{Difficulty, MatchState, Phase};
use crate::consts::*;

/// Keys the simulation recognizes; anything else is dropped upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    W,
    S,
    P,
    M,
    C,
    X,
    Escape,
    Space,
}

/// A discrete input event drained for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window/terminal close request (or Ctrl-C)
    Quit,
    KeyDown(Key),
}

/// All input consumed by one simulation tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
    /// Held movement keys for the human paddle
    pub move_up: bool,
    pub move_down: bool,
}

impl TickInput {
    /// Convenience for tests and scripted input
    pub fn key(key: Key) -> Self {
        Self {
            events: vec![InputEvent::KeyDown(key)],
            ..Self::default()
        }
    }
}

/// Advance the match by one tick
///
/// Returns the ball events observed, for sound cues and logging.
pub fn tick(state: &mut MatchState, input: &TickInput) -> Vec<BallEvent> {
    let mut events = Vec::new();

    // Cross-cutting actions first: quit and mute apply in every phase.
    for ev in &input.events {
        match ev {
            InputEvent::Quit | InputEvent::KeyDown(Key::X) => {
                if state.phase != Phase::Terminated {
                    log::info!("quit requested");
                    state.phase = Phase::Terminated;
                }
                return events;
            }
            InputEvent::KeyDown(Key::M) => state.muted = !state.muted,
            _ => {}
        }
    }

    match state.phase {
        Phase::MenuSelect => menu_tick(state, input),
        Phase::Countdown => countdown_tick(state),
        Phase::Playing => playing_tick(state, input, &mut events),
        Phase::Paused => paused_tick(state, input),
        Phase::Ended => ended_tick(state, input),
        Phase::Terminated => {}
    }

    events
}

fn menu_tick(state: &mut MatchState, input: &TickInput) {
    for ev in &input.events {
        let difficulty = match ev {
            InputEvent::KeyDown(Key::Num1) => Difficulty::Easy,
            InputEvent::KeyDown(Key::Num2) => Difficulty::Medium,
            InputEvent::KeyDown(Key::Num3) => Difficulty::Hard,
            _ => continue,
        };
        log::info!("difficulty selected: {}", difficulty.as_str());
        state.start(difficulty);
        return;
    }
}

fn countdown_tick(state: &mut MatchState) {
    state.countdown_ticks += 1;
    if state.countdown_ticks >= COUNTDOWN_STEPS * COUNTDOWN_STEP_TICKS {
        state.phase = Phase::Playing;
    }
}

fn playing_tick(state: &mut MatchState, input: &TickInput, events: &mut Vec<BallEvent>) {
    for ev in &input.events {
        if let InputEvent::KeyDown(Key::P) = ev {
            state.phase = Phase::Paused;
            return;
        }
    }

    // Human paddle from held keys
    if input.move_up {
        state.player.move_up(PLAYER_SPEED);
    }
    if input.move_down {
        state.player.move_down(PLAYER_SPEED);
    }

    // AI paddle, then ball resolution
    let profile = AiProfile::for_difficulty(state.difficulty);
    ai::drive(&mut state.ai, &state.ball, profile);

    if state.ball.flash > 0 {
        state.ball.flash -= 1;
    }
    physics::resolve(state, events);

    state.play_ticks += 1;
    if state.time_left_secs() == 0 {
        log::info!(
            "time up: {} - {} ({:?})",
            state.score.0,
            state.score.1,
            state.winner()
        );
        state.phase = Phase::Ended;
    }
}

fn paused_tick(state: &mut MatchState, input: &TickInput) {
    for ev in &input.events {
        if let InputEvent::KeyDown(Key::C) = ev {
            state.phase = Phase::Playing;
            return;
        }
    }
}

fn ended_tick(state: &mut MatchState, input: &TickInput) {
    for ev in &input.events {
        if let InputEvent::KeyDown(Key::Escape | Key::Space) = ev {
            state.phase = Phase::Terminated;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::Side;
    use glam::IVec2;

    fn no_input() -> TickInput {
        TickInput::default()
    }

    /// Run the countdown out so the state lands in `Playing`.
    fn into_playing(state: &mut MatchState, difficulty: Key) {
        tick(state, &TickInput::key(difficulty));
        assert_eq!(state.phase, Phase::Countdown);
        for _ in 0..(COUNTDOWN_STEPS * COUNTDOWN_STEP_TICKS) {
            tick(state, &no_input());
        }
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn menu_key_two_selects_medium_and_serves_right() {
        let mut state = MatchState::new(9);
        tick(&mut state, &TickInput::key(Key::Num2));

        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.base_speed(), 4);
        assert_eq!(state.ball.vel.x, 4);
        assert_eq!(state.phase, Phase::Countdown);
    }

    #[test]
    fn menu_ignores_unrelated_keys() {
        let mut state = MatchState::new(9);
        for key in [Key::W, Key::S, Key::P, Key::C, Key::Space] {
            tick(&mut state, &TickInput::key(key));
            assert_eq!(state.phase, Phase::MenuSelect);
        }
    }

    #[test]
    fn countdown_runs_four_seconds_then_plays() {
        let mut state = MatchState::new(9);
        tick(&mut state, &TickInput::key(Key::Num1));

        let mut seen = Vec::new();
        while state.phase == Phase::Countdown {
            let label = state.countdown_label();
            if seen.last() != Some(&label) {
                seen.push(label);
            }
            tick(&mut state, &no_input());
        }
        assert_eq!(seen, vec!["3", "2", "1", "GO!"]);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn held_keys_move_the_player_paddle() {
        let mut state = MatchState::new(9);
        into_playing(&mut state, Key::Num2);

        let start = state.player.pos.y;
        let input = TickInput {
            move_up: true,
            ..TickInput::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.pos.y, start - PLAYER_SPEED);

        let input = TickInput {
            move_down: true,
            ..TickInput::default()
        };
        tick(&mut state, &input);
        tick(&mut state, &input);
        assert_eq!(state.player.pos.y, start + PLAYER_SPEED);
    }

    #[test]
    fn pause_freezes_everything_and_resume_restores() {
        let mut state = MatchState::new(5);
        into_playing(&mut state, Key::Num3);
        for _ in 0..100 {
            tick(&mut state, &no_input());
        }

        tick(&mut state, &TickInput::key(Key::P));
        assert_eq!(state.phase, Phase::Paused);

        let frozen_ball = state.ball.pos;
        let frozen_ticks = state.play_ticks;
        let frozen_score = state.score;
        for _ in 0..500 {
            tick(&mut state, &no_input());
        }
        assert_eq!(state.ball.pos, frozen_ball);
        assert_eq!(state.play_ticks, frozen_ticks);
        assert_eq!(state.score, frozen_score);

        tick(&mut state, &TickInput::key(Key::C));
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.play_ticks, frozen_ticks);
    }

    #[test]
    fn mute_toggles_in_any_phase_without_touching_simulation() {
        let mut state = MatchState::new(5);
        assert!(!state.muted);
        tick(&mut state, &TickInput::key(Key::M));
        assert!(state.muted);
        tick(&mut state, &TickInput::key(Key::M));
        assert!(!state.muted);
        assert_eq!(state.phase, Phase::MenuSelect);

        // During play, two identical seeds with and without mute presses
        // must produce the same ball trajectory.
        let mut a = MatchState::new(77);
        let mut b = MatchState::new(77);
        into_playing(&mut a, Key::Num2);
        into_playing(&mut b, Key::Num2);
        for i in 0..2_000 {
            let input = if i % 50 == 0 {
                TickInput::key(Key::M)
            } else {
                no_input()
            };
            tick(&mut a, &input);
            tick(&mut b, &no_input());
        }
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn match_ends_when_the_clock_runs_out() {
        let mut state = MatchState::new(1);
        into_playing(&mut state, Key::Num1);

        state.play_ticks = TIME_LIMIT_SECS * ACTIVE_TICK_HZ as u64 - 1;
        tick(&mut state, &no_input());
        assert_eq!(state.phase, Phase::Ended);

        // No further simulation after the end
        let ball = state.ball.pos;
        for _ in 0..100 {
            tick(&mut state, &no_input());
        }
        assert_eq!(state.ball.pos, ball);
    }

    #[test]
    fn quit_terminates_from_every_phase() {
        for setup in 0..5 {
            let mut state = MatchState::new(2);
            match setup {
                0 => {}
                1 => {
                    tick(&mut state, &TickInput::key(Key::Num1));
                }
                2 => into_playing(&mut state, Key::Num1),
                3 => {
                    into_playing(&mut state, Key::Num1);
                    tick(&mut state, &TickInput::key(Key::P));
                }
                _ => {
                    into_playing(&mut state, Key::Num1);
                    state.play_ticks = TIME_LIMIT_SECS * ACTIVE_TICK_HZ as u64;
                    tick(&mut state, &no_input());
                    assert_eq!(state.phase, Phase::Ended);
                }
            }
            tick(&mut state, &TickInput::key(Key::X));
            assert_eq!(state.phase, Phase::Terminated);
        }
    }

    #[test]
    fn end_screen_accepts_space_and_escape() {
        for key in [Key::Space, Key::Escape] {
            let mut state = MatchState::new(2);
            into_playing(&mut state, Key::Num2);
            state.play_ticks = TIME_LIMIT_SECS * ACTIVE_TICK_HZ as u64;
            tick(&mut state, &no_input());
            assert_eq!(state.phase, Phase::Ended);

            tick(&mut state, &TickInput::key(key));
            assert_eq!(state.phase, Phase::Terminated);
        }
    }

    #[test]
    fn paddles_stay_on_screen_for_a_whole_match() {
        let mut state = MatchState::new(1234);
        into_playing(&mut state, Key::Num3);

        let mut held_down = true;
        while state.phase == Phase::Playing {
            // Wiggle the human paddle every second
            if state.play_ticks % ACTIVE_TICK_HZ as u64 == 0 {
                held_down = !held_down;
            }
            let input = TickInput {
                move_up: !held_down,
                move_down: held_down,
                ..TickInput::default()
            };
            tick(&mut state, &input);

            for paddle in [&state.player, &state.ai] {
                assert!(paddle.pos.y >= 0);
                assert!(paddle.pos.y <= SCREEN_H - PADDLE_H);
            }
        }
        assert_eq!(state.phase, Phase::Ended);
    }

    #[test]
    fn ai_never_moves_while_ball_travels_away() {
        let mut state = MatchState::new(8);
        into_playing(&mut state, Key::Num3);

        for _ in 0..5_000 {
            let before = state.ai.pos.y;
            let vx_before = state.ball.vel.x;
            tick(&mut state, &no_input());
            if vx_before <= 0 {
                assert_eq!(state.ai.pos.y, before);
            }
            if state.phase != Phase::Playing {
                break;
            }
        }
    }

    #[test]
    fn post_score_state_matches_serve_invariants() {
        let mut state = MatchState::new(3);
        into_playing(&mut state, Key::Num2);

        // Force a left-player score on the next tick.
        state.ball.pos = IVec2::new(SCREEN_W - BALL_SIZE, 250);
        state.ball.vel = IVec2::new(4, 0);
        let events = tick(&mut state, &no_input());
        assert!(events.contains(&BallEvent::Score(Side::Left)));
        assert_eq!(state.score.0, 1);
        assert_eq!(state.ball.center(), IVec2::new(SCREEN_W / 2, SCREEN_H / 2));
        assert_eq!(state.ball.vel.x.abs(), state.base_speed());
    }
}
