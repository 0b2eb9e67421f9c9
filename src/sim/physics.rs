//! Per-tick ball resolver
//!
//! Fixed resolution order: advance the ball, bounce off the top/bottom
//! walls, award points at the left/right edges, then test paddle overlap.
//! A scoring edge resets the ball outright, so wall bounce and scoring are
//! mutually exclusive within a tick; a paddle hit is independent and may
//! coincide with a wall bounce.

use super::collision::ball_hits_paddle;
use super::entities::Side;
use super::state::MatchState;
use crate::consts::{BALL_SIZE, SCREEN_H, SCREEN_W};

/// What the resolver observed during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    WallBounce,
    PaddleBounce,
    /// A point for the named side
    Score(Side),
}

/// Advance the ball one tick and resolve all collisions and scoring
pub fn resolve(state: &mut MatchState, events: &mut Vec<BallEvent>) {
    let base_speed = state.base_speed();
    state.ball.advance();

    // Scoring edges first: a reset overwrites any same-tick wall bounce,
    // so only the score is reported.
    let scored = if state.ball.pos.x + BALL_SIZE >= SCREEN_W {
        Some(Side::Left)
    } else if state.ball.pos.x <= 0 {
        Some(Side::Right)
    } else {
        None
    };

    match scored {
        Some(side) => {
            state.award_point(side);
            // Serve toward the side that was scored on; play continues
            // without delay.
            let toward = match side {
                Side::Left => Side::Right,
                Side::Right => Side::Left,
            };
            state.ball.reset(toward, base_speed, &mut state.rng);
            events.push(BallEvent::Score(side));
        }
        None => {
            if state.ball.pos.y <= 0 || state.ball.pos.y + BALL_SIZE >= SCREEN_H {
                state.ball.bounce_off_wall();
                events.push(BallEvent::WallBounce);
            }
        }
    }

    if ball_hits_paddle(&state.ball, &state.player) || ball_hits_paddle(&state.ball, &state.ai) {
        state.ball.bounce_off_paddle(&mut state.rng);
        events.push(BallEvent::PaddleBounce);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Difficulty, MatchState};
    use glam::IVec2;

    fn playing_state(difficulty: Difficulty) -> MatchState {
        let mut state = MatchState::new(1);
        state.start(difficulty);
        state
    }

    #[test]
    fn right_edge_scores_for_left_player_and_recenters() {
        let mut state = playing_state(Difficulty::Medium);
        state.ball.pos = IVec2::new(SCREEN_W - BALL_SIZE, 200);
        state.ball.vel = IVec2::new(4, 0);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.score, (1, 0));
        assert_eq!(events, vec![BallEvent::Score(Side::Left)]);
        assert_eq!(state.ball.center(), IVec2::new(SCREEN_W / 2, SCREEN_H / 2));
        // Serve continues toward the scored-on (right) side
        assert_eq!(state.ball.vel.x, state.base_speed());
    }

    #[test]
    fn left_edge_scores_for_ai_and_serves_left() {
        let mut state = playing_state(Difficulty::Hard);
        state.ball.pos = IVec2::new(2, 300);
        state.ball.vel = IVec2::new(-6, 1);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.score, (0, 1));
        assert_eq!(events, vec![BallEvent::Score(Side::Right)]);
        assert_eq!(state.ball.vel.x, -state.base_speed());
    }

    #[test]
    fn scoring_is_exclusive_per_tick() {
        // Corner tick: ball exits through the top-right corner. Only the
        // score is reported, never a wall bounce alongside it.
        let mut state = playing_state(Difficulty::Medium);
        state.ball.pos = IVec2::new(SCREEN_W - BALL_SIZE, 1);
        state.ball.vel = IVec2::new(4, -4);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(events, vec![BallEvent::Score(Side::Left)]);
        assert_eq!(state.score, (1, 0));
    }

    #[test]
    fn wall_bounce_flips_vy_and_keeps_vx() {
        let mut state = playing_state(Difficulty::Medium);
        state.ball.pos = IVec2::new(300, 2);
        state.ball.vel = IVec2::new(4, -5);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(events, vec![BallEvent::WallBounce]);
        assert_eq!(state.ball.vel, IVec2::new(4, 5));
    }

    #[test]
    fn paddle_overlap_reverses_horizontal_direction() {
        let mut state = playing_state(Difficulty::Medium);
        // Place the ball so that after one advance it penetrates the AI
        // paddle's left edge.
        state.ai.pos.y = 200;
        state.ball.pos = IVec2::new(state.ai.pos.x - BALL_SIZE - 2, 240);
        state.ball.vel = IVec2::new(4, 0);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(events, vec![BallEvent::PaddleBounce]);
        assert_eq!(state.ball.vel.x, -4);
        assert!((-9..=9).contains(&state.ball.vel.y));
    }

    #[test]
    fn scores_never_decrease_over_a_long_run() {
        let mut state = playing_state(Difficulty::Easy);
        let mut events = Vec::new();
        let mut last = state.score;
        for _ in 0..20_000 {
            resolve(&mut state, &mut events);
            assert!(state.score.0 >= last.0 && state.score.1 >= last.1);
            last = state.score;
            events.clear();
        }
    }
}
