//! Rules engine trait.
//!
//! The orchestrator drives a game entirely through `RulesEngine`:
//! - What moves are legal
//! - How moves change state
//! - Whether the game is over
//!
//! `ScoundrelRules` is the standard rule set. Every method must be pure:
//! the orchestrator may call them on stale snapshots and relies on the
//! same input always producing the same output.

use smallvec::SmallVec;

use super::{executor, finish, room, validator};
use crate::core::{FinishState, GameMove, GameState};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_valid_move`: No side effects
/// - `apply_move`: Only called with moves `is_valid_move` accepted
/// - `evaluate_finish`: Return `None` if the game continues
pub trait RulesEngine: Send + Sync {
    /// Whether `mv` is legal in `state`.
    fn is_valid_move(&self, state: &GameState, mv: &GameMove) -> bool;

    /// Apply a legal move. Derived fields are left stale.
    fn apply_move(&self, state: &GameState, mv: &GameMove) -> GameState;

    /// Terminal check, run after every transition.
    fn evaluate_finish(&self, state: &GameState) -> Option<FinishState>;

    // === Convenience Methods ===

    /// Recompute the derived fields of a freshly transitioned state.
    fn derive(&self, mut state: GameState) -> GameState {
        state.finish_state = self.evaluate_finish(&state);
        state.can_skip_current_room = room::can_skip_room(&state);
        state
    }

    /// Enumerate every legal move in the current room.
    ///
    /// A room holds at most four cards with at most two moves each.
    fn legal_moves(&self, state: &GameState) -> SmallVec<[GameMove; 8]> {
        state
            .current_room
            .room_deck
            .iter()
            .flat_map(|&card| validator::candidate_moves(card))
            .filter(|mv| self.is_valid_move(state, mv))
            .collect()
    }
}

/// The standard Scoundrel rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoundrelRules;

impl RulesEngine for ScoundrelRules {
    fn is_valid_move(&self, state: &GameState, mv: &GameMove) -> bool {
        validator::is_valid_move(state, mv)
    }

    fn apply_move(&self, state: &GameState, mv: &GameMove) -> GameState {
        executor::apply_move(state, mv)
    }

    fn evaluate_finish(&self, state: &GameState) -> Option<FinishState> {
        finish::evaluate_finish(state)
    }
}
