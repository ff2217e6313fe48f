//! Per-frame simulation tick.
//!
//! One call per display refresh, fixed order: sample input, move the
//! player, advance obstacles, check the goal line, check collisions.
//! Obstacle speeds are per-frame pixel deltas; there is no delta-time
//! scaling.

use super::collision;
use super::input::{self, KeyStates, PadAxes};
use super::state::GameState;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub keys: KeyStates,
    /// Reading from the one polled analog device, if connected
    pub pad: Option<PadAxes>,
}

/// State transitions the driver reacts to (audio cues, leaderboard,
/// restart control). Each is emitted at most once per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player crossed the goal line; score already incremented
    RoundWon { score: u32 },
    /// A collision ended the game. Emitted exactly once per game -
    /// later ticks are frozen and return no events.
    GameOver { score: u32 },
}

/// Advance the game by one frame.
///
/// Once `game_over` is set the state is frozen: the player no longer
/// moves, obstacles stop, and no further events are produced. Only a
/// fresh [`GameState::new`] restarts play.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.game_over {
        return events;
    }

    let intent = input::sample(&input.keys, input.pad);
    state.player.apply_intent(intent);

    state.obstacles.advance();

    // Goal line: y < 0 wins the round. The reset moves the player back
    // below the line, so a crossing can never double-count.
    if state.player.pos.y < 0.0 {
        state.score += 1;
        state.reset_round();
        events.push(GameEvent::RoundWon { score: state.score });
    }

    if collision::first_hit(state.player.pos, state.obstacles.as_slice()).is_some() {
        state.game_over = true;
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}
