//! Game state: the single root aggregate of a Scoundrel game.
//!
//! ## GameState
//!
//! - Health
//! - Dungeon (draw pile), current room, discard pile
//! - Weapon stack
//! - Derived flags: skip eligibility, finish state
//!
//! All card sequences use `im` persistent vectors, so producing the next
//! state from the previous one shares structure instead of copying whole
//! decks. States are never mutated once published; every transition
//! returns a fresh value.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{MAX_HP, ROOM_SIZE};
use crate::cards::Card;

/// Cards in the current room.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    /// Cards still waiting to be resolved, in draw order.
    pub room_deck: Vector<Card>,

    /// Cards resolved in this room, in resolution order.
    pub cards_played_in_room: Vector<Card>,
}

impl RoomState {
    /// A fresh room with nothing resolved yet.
    #[must_use]
    pub fn new(room_deck: Vector<Card>) -> Self {
        Self {
            room_deck,
            cards_played_in_room: Vector::new(),
        }
    }

    /// Number of unresolved cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.room_deck.len()
    }

    /// Whether the room is full and nothing in it has been resolved.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.room_deck.len() == ROOM_SIZE && self.cards_played_in_room.is_empty()
    }

    /// Whether `card` is still waiting in this room.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.room_deck.contains(card)
    }

    /// Whether a potion has already been drunk or thrown away in this room.
    #[must_use]
    pub fn potion_resolved(&self) -> bool {
        self.cards_played_in_room.iter().any(Card::is_potion)
    }
}

/// Terminal outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Present once the game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishState {
    pub final_score: i32,
}

impl FinishState {
    /// A positive score is a win; zero or below is a loss.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        if self.final_score > 0 {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome(), Outcome::Win)
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current health, always within `0..=MAX_HP`.
    pub health_points: i32,

    /// Undrawn cards. The top of the pile is the end of the vector.
    pub dungeon_deck: Vector<Card>,

    /// The room being played.
    pub current_room: RoomState,

    /// Spent cards. Order carries no meaning.
    pub discarded_deck: Vector<Card>,

    /// Equipped weapon followed by the monsters slain with it, in order.
    pub weapon_deck: Vector<Card>,

    /// Whether the room before this one was skipped.
    pub was_last_room_skipped: bool,

    /// Derived: whether `skip_room` would currently be accepted.
    pub can_skip_current_room: bool,

    /// Derived: set once the game is over.
    pub finish_state: Option<FinishState>,
}

impl GameState {
    /// A state at full health with the given dungeon and first room.
    ///
    /// Derived fields start cleared; run the state through
    /// `rules::derive` to compute them.
    #[must_use]
    pub fn new(dungeon_deck: Vector<Card>, room_deck: Vector<Card>) -> Self {
        Self {
            health_points: MAX_HP,
            dungeon_deck,
            current_room: RoomState::new(room_deck),
            discarded_deck: Vector::new(),
            weapon_deck: Vector::new(),
            was_last_room_skipped: false,
            can_skip_current_room: false,
            finish_state: None,
        }
    }

    /// Number of unresolved cards in the room.
    #[must_use]
    pub fn room_size(&self) -> usize {
        self.current_room.size()
    }

    /// Whether the room is down to its last card and must be refilled
    /// before play continues.
    #[must_use]
    pub fn awaiting_next_room(&self) -> bool {
        self.room_size() == 1
    }

    /// The equipped weapon, if any.
    #[must_use]
    pub fn equipped_weapon(&self) -> Option<Card> {
        self.weapon_deck.front().copied()
    }

    /// The most recent monster slain with the equipped weapon.
    #[must_use]
    pub fn last_slain_monster(&self) -> Option<Card> {
        if self.weapon_deck.len() > 1 {
            self.weapon_deck.back().copied()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finish_state.is_some()
    }

    /// Every card the state holds, wherever it is.
    ///
    /// The played set only records which cards this room resolved; those
    /// cards already sit on the discard pile or the weapon stack.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.dungeon_deck
            .iter()
            .chain(self.current_room.room_deck.iter())
            .chain(self.discarded_deck.iter())
            .chain(self.weapon_deck.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, Suit};

    fn room() -> Vector<Card> {
        im::vector![
            Card::number(3, Suit::Clubs),
            Card::number(5, Suit::Diamonds),
            Card::number(7, Suit::Hearts),
            Card::face(Face::Jack, Suit::Spades),
        ]
    }

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(im::vector![Card::number(2, Suit::Spades)], room());

        assert_eq!(state.health_points, MAX_HP);
        assert_eq!(state.dungeon_deck.len(), 1);
        assert_eq!(state.room_size(), 4);
        assert!(state.current_room.is_untouched());
        assert!(state.weapon_deck.is_empty());
        assert!(state.discarded_deck.is_empty());
        assert!(!state.is_finished());
    }

    #[test]
    fn test_weapon_accessors() {
        let mut state = GameState::new(Vector::new(), room());
        assert_eq!(state.equipped_weapon(), None);
        assert_eq!(state.last_slain_monster(), None);

        let sword = Card::number(6, Suit::Diamonds);
        state.weapon_deck.push_back(sword);
        assert_eq!(state.equipped_weapon(), Some(sword));
        assert_eq!(state.last_slain_monster(), None);

        let orc = Card::number(9, Suit::Clubs);
        state.weapon_deck.push_back(orc);
        assert_eq!(state.equipped_weapon(), Some(sword));
        assert_eq!(state.last_slain_monster(), Some(orc));
    }

    #[test]
    fn test_room_potion_tracking() {
        let mut room_state = RoomState::new(room());
        assert!(!room_state.potion_resolved());

        room_state
            .cards_played_in_room
            .push_back(Card::number(3, Suit::Clubs));
        assert!(!room_state.potion_resolved());

        room_state
            .cards_played_in_room
            .push_back(Card::number(7, Suit::Hearts));
        assert!(room_state.potion_resolved());
        assert!(!room_state.is_untouched());
    }

    #[test]
    fn test_finish_outcome() {
        assert_eq!(FinishState { final_score: 21 }.outcome(), Outcome::Win);
        assert_eq!(FinishState { final_score: 1 }.outcome(), Outcome::Win);
        assert_eq!(FinishState { final_score: 0 }.outcome(), Outcome::Loss);
        assert_eq!(FinishState { final_score: -40 }.outcome(), Outcome::Loss);
        assert!(!FinishState { final_score: 0 }.is_win());
    }

    #[test]
    fn test_all_cards() {
        let mut state = GameState::new(im::vector![Card::number(2, Suit::Spades)], room());
        state.discarded_deck.push_back(Card::number(4, Suit::Clubs));
        state.weapon_deck.push_back(Card::number(8, Suit::Diamonds));
        state
            .current_room
            .cards_played_in_room
            .push_back(Card::number(4, Suit::Clubs));

        assert_eq!(state.all_cards().count(), 7);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = GameState::new(Vector::new(), room());
        let mut next = original.clone();
        next.current_room.room_deck.pop_front();

        assert_eq!(original.room_size(), 4);
        assert_eq!(next.room_size(), 3);
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::new(im::vector![Card::number(2, Suit::Spades)], room());
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
