//! Move legality.
//!
//! Validation is a pure predicate over a state snapshot. It never
//! changes anything, so the orchestrator can call it without the
//! mutation lock and again under the lock before applying.

use smallvec::{smallvec, SmallVec};

use crate::cards::{Card, CardCategory};
use crate::core::{GameMove, GameState};

/// Whether `mv` may be applied to `state`.
///
/// Moves are only considered while the game is running, the room still
/// has more than one card left, and the targeted card is in the room.
#[must_use]
pub fn is_valid_move(state: &GameState, mv: &GameMove) -> bool {
    if state.is_finished() || state.awaiting_next_room() {
        return false;
    }
    if !state.current_room.contains(&mv.card()) {
        return false;
    }

    match *mv {
        GameMove::EquipWeapon(card) => card.is_weapon(),
        GameMove::FightMonster { card, bare_handed } => can_fight(state, card, bare_handed),
        GameMove::UsePotion(card) => card.is_potion() && !state.current_room.potion_resolved(),
        // Throwing a potion away is always allowed, even after one was drunk
        GameMove::DiscardPotion(card) => card.is_potion(),
    }
}

fn can_fight(state: &GameState, card: Card, bare_handed: bool) -> bool {
    let Some(strength) = card.monster_strength() else {
        return false;
    };
    if bare_handed {
        return true;
    }

    match (state.equipped_weapon(), state.last_slain_monster()) {
        (None, _) => false,
        (Some(weapon), None) => weapon.is_weapon(),
        (Some(_), Some(last)) => last
            .monster_strength()
            .is_some_and(|last_strength| strength < last_strength),
    }
}

/// Every move that could target `card`, legal or not.
#[must_use]
pub fn candidate_moves(card: Card) -> SmallVec<[GameMove; 2]> {
    match card.category() {
        Some(CardCategory::Weapon) => smallvec![GameMove::EquipWeapon(card)],
        Some(CardCategory::Monster) => smallvec![
            GameMove::fight_with_weapon(card),
            GameMove::fight_bare_handed(card),
        ],
        Some(CardCategory::Potion) => {
            smallvec![GameMove::UsePotion(card), GameMove::DiscardPotion(card)]
        }
        None => SmallVec::new(),
    }
}
