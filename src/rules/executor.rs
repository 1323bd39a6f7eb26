//! State transitions for validated moves.
//!
//! `apply_move` assumes `validator::is_valid_move` already accepted the
//! move against the same state. It returns a new state and leaves the
//! input untouched. Derived fields are not recomputed here.

use im::Vector;

use crate::cards::Card;
use crate::core::{GameMove, GameState, RoomState, MAX_HP};

/// Clamp a health value into `0..=MAX_HP`.
#[must_use]
pub fn clamp_health(hp: i32) -> i32 {
    hp.clamp(0, MAX_HP)
}

/// Apply a validated move.
#[must_use]
pub fn apply_move(state: &GameState, mv: &GameMove) -> GameState {
    match *mv {
        GameMove::EquipWeapon(card) => equip_weapon(state, card),
        GameMove::FightMonster {
            card,
            bare_handed: true,
        } => fight_bare_handed(state, card),
        GameMove::FightMonster {
            card,
            bare_handed: false,
        } => fight_with_weapon(state, card),
        GameMove::UsePotion(card) => use_potion(state, card),
        GameMove::DiscardPotion(card) => discard_potion(state, card),
    }
}

fn equip_weapon(state: &GameState, card: Card) -> GameState {
    let mut discarded_deck = state.discarded_deck.clone();
    discarded_deck.append(state.weapon_deck.clone());

    GameState {
        current_room: resolve_in_room(&state.current_room, card),
        discarded_deck,
        weapon_deck: im::vector![card],
        ..state.clone()
    }
}

fn fight_bare_handed(state: &GameState, card: Card) -> GameState {
    let strength = card.monster_strength().unwrap_or(0);

    GameState {
        health_points: clamp_health(state.health_points - strength),
        current_room: resolve_in_room(&state.current_room, card),
        discarded_deck: pushed(&state.discarded_deck, card),
        ..state.clone()
    }
}

fn fight_with_weapon(state: &GameState, card: Card) -> GameState {
    let strength = card.monster_strength().unwrap_or(0);
    let weapon = state
        .equipped_weapon()
        .and_then(|w| w.weapon_value())
        .unwrap_or(0);
    let damage = (strength - weapon).max(0);

    GameState {
        health_points: clamp_health(state.health_points - damage),
        current_room: resolve_in_room(&state.current_room, card),
        // The monster stays on the weapon to limit its next fight
        weapon_deck: pushed(&state.weapon_deck, card),
        ..state.clone()
    }
}

fn use_potion(state: &GameState, card: Card) -> GameState {
    let heal = card.potion_value().unwrap_or(0);

    GameState {
        health_points: clamp_health(state.health_points + heal),
        current_room: resolve_in_room(&state.current_room, card),
        discarded_deck: pushed(&state.discarded_deck, card),
        ..state.clone()
    }
}

fn discard_potion(state: &GameState, card: Card) -> GameState {
    GameState {
        current_room: resolve_in_room(&state.current_room, card),
        discarded_deck: pushed(&state.discarded_deck, card),
        ..state.clone()
    }
}

/// Move `card` from the room's unresolved cards to its played cards.
fn resolve_in_room(room: &RoomState, card: Card) -> RoomState {
    let mut room_deck = room.room_deck.clone();
    if let Some(index) = room_deck.index_of(&card) {
        room_deck.remove(index);
    }

    RoomState {
        room_deck,
        cards_played_in_room: pushed(&room.cards_played_in_room, card),
    }
}

fn pushed(cards: &Vector<Card>, card: Card) -> Vector<Card> {
    let mut cards = cards.clone();
    cards.push_back(card);
    cards
}
