//! End-of-game detection and scoring.

use crate::core::{FinishState, GameState, ROOM_SIZE};

/// Evaluate whether `state` ends the game.
///
/// - Health at zero: loss, scored as health minus the strength of every
///   monster still in the dungeon.
/// - Room down to its last card with too few cards left to refill it:
///   win, scored as health plus any potions left in the room.
#[must_use]
pub fn evaluate_finish(state: &GameState) -> Option<FinishState> {
    if state.health_points <= 0 {
        let remaining_monsters: i32 = state
            .dungeon_deck
            .iter()
            .filter_map(|c| c.monster_strength())
            .sum();
        return Some(FinishState {
            final_score: state.health_points - remaining_monsters,
        });
    }

    if dungeon_exhausted(state) {
        let leftover_potions: i32 = state
            .current_room
            .room_deck
            .iter()
            .filter_map(|c| c.potion_value())
            .sum();
        return Some(FinishState {
            final_score: state.health_points + leftover_potions,
        });
    }

    None
}

/// The last room is cleared and no further room can be formed.
fn dungeon_exhausted(state: &GameState) -> bool {
    state.awaiting_next_room() && state.dungeon_deck.len() < ROOM_SIZE - 1
}
