//! Room lifecycle: forming, advancing and skipping rooms.
//!
//! The dungeon is drawn from its top, which is the end of
//! `GameState::dungeon_deck`. Cards drawn together keep their pile order.
//!
//! As with moves, each action is split into a predicate (`can_*`) and a
//! transition. Transitions assume their predicate holds.

use im::Vector;

use crate::cards::Card;
use crate::core::{EngineError, GameRng, GameState, RoomState, ROOM_SIZE};

/// Draw `count` cards from the top of `draw_pile`.
///
/// Returns `(room_cards, remaining_pile)`.
pub fn form_room(
    draw_pile: &Vector<Card>,
    count: usize,
) -> Result<(Vector<Card>, Vector<Card>), EngineError> {
    if draw_pile.len() < count {
        return Err(EngineError::InsufficientCards {
            needed: count,
            available: draw_pile.len(),
        });
    }

    let mut remaining = draw_pile.clone();
    let room = remaining.split_off(draw_pile.len() - count);
    Ok((room, remaining))
}

/// Build the opening state of a game from a shuffled dungeon.
pub fn open_dungeon(dungeon: Vector<Card>) -> Result<GameState, EngineError> {
    let (room, remaining) = form_room(&dungeon, ROOM_SIZE)?;
    Ok(GameState::new(remaining, room))
}

/// Whether the room is down to its last card and the game is still running.
#[must_use]
pub fn can_advance_room(state: &GameState) -> bool {
    !state.is_finished() && state.awaiting_next_room()
}

/// Refill the room around its carried-over card.
///
/// Resolved cards of the old room go to the discard pile and the skip
/// restriction is lifted. A resolved card already on the discard pile or
/// the weapon stack stays where it is, so no card is ever held twice.
pub fn advance_room(state: &GameState) -> Result<GameState, EngineError> {
    let needed = ROOM_SIZE.saturating_sub(state.room_size());
    let (drawn, dungeon_deck) = form_room(&state.dungeon_deck, needed)?;

    let mut room_deck = state.current_room.room_deck.clone();
    room_deck.append(drawn);

    let mut discarded_deck = state.discarded_deck.clone();
    let loose = state
        .current_room
        .cards_played_in_room
        .iter()
        .filter(|card| !state.discarded_deck.contains(card) && !state.weapon_deck.contains(card))
        .copied()
        .collect::<Vec<_>>();
    discarded_deck.extend(loose);

    Ok(GameState {
        dungeon_deck,
        current_room: RoomState::new(room_deck),
        discarded_deck,
        was_last_room_skipped: false,
        ..state.clone()
    })
}

/// Whether the current room may be skipped.
///
/// Requires an untouched room, a non-empty dungeon and that the previous
/// room was not skipped too.
#[must_use]
pub fn can_skip_room(state: &GameState) -> bool {
    !state.is_finished()
        && !state.was_last_room_skipped
        && state.current_room.is_untouched()
        && !state.dungeon_deck.is_empty()
}

/// Put the room back under the dungeon in random order and draw a new one.
pub fn skip_room(state: &GameState, rng: &mut GameRng) -> Result<GameState, EngineError> {
    let mut skipped: Vec<Card> = state.current_room.room_deck.iter().copied().collect();
    rng.shuffle(&mut skipped);

    let mut pile: Vector<Card> = skipped.into_iter().collect();
    pile.append(state.dungeon_deck.clone());

    let (room, dungeon_deck) = form_room(&pile, ROOM_SIZE)?;

    Ok(GameState {
        dungeon_deck,
        current_room: RoomState::new(room),
        was_last_room_skipped: true,
        ..state.clone()
    })
}
