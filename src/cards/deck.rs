//! Dungeon construction.
//!
//! `DeckBuilder` is the seam the orchestrator builds every new game
//! through. `ScoundrelDeck` produces the standard 44-card dungeon:
//!
//! - 2-10 of every suit (36 cards)
//! - J, Q, K, A of the two monster suits (8 cards)

use super::card::{Card, Face, Rank, Suit};
use crate::core::GameRng;

/// Builds and shuffles the card pool for a new game.
pub trait DeckBuilder: Send + Sync {
    /// The unshuffled card pool.
    fn create_deck(&self) -> Vec<Card>;

    /// Shuffle the pool `passes` times.
    ///
    /// Default implementation applies `passes` uniform permutations in
    /// sequence.
    fn shuffle_deck(&self, mut deck: Vec<Card>, rng: &mut GameRng, passes: u32) -> Vec<Card> {
        for _ in 0..passes {
            rng.shuffle(&mut deck);
        }
        deck
    }
}

/// The standard Scoundrel dungeon.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoundrelDeck;

impl ScoundrelDeck {
    /// Number of cards in the standard dungeon.
    pub const SIZE: usize = 44;

    fn number_cards(suit: Suit) -> impl Iterator<Item = Card> {
        (Rank::MIN_NUMBER..=Rank::MAX_NUMBER).map(move |n| Card::number(n, suit))
    }

    fn face_cards(suit: Suit) -> impl Iterator<Item = Card> {
        // Weapons and potions never come as faces
        let faces: &'static [Face] = if suit.has_faces() { &Face::ALL } else { &[] };
        faces.iter().map(move |&face| Card::face(face, suit))
    }
}

impl DeckBuilder for ScoundrelDeck {
    fn create_deck(&self) -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Self::number_cards(suit).chain(Self::face_cards(suit)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCategory;

    fn count_suit(deck: &[Card], suit: Suit) -> usize {
        deck.iter().filter(|c| c.suit == suit).count()
    }

    #[test]
    fn test_deck_composition() {
        let deck = ScoundrelDeck.create_deck();

        assert_eq!(deck.len(), ScoundrelDeck::SIZE);
        assert_eq!(count_suit(&deck, Suit::Diamonds), 9);
        assert_eq!(count_suit(&deck, Suit::Hearts), 9);
        assert_eq!(count_suit(&deck, Suit::Spades), 13);
        assert_eq!(count_suit(&deck, Suit::Clubs), 13);
    }

    #[test]
    fn test_every_card_has_a_role() {
        let deck = ScoundrelDeck.create_deck();

        let weapons = deck
            .iter()
            .filter(|c| c.category() == Some(CardCategory::Weapon))
            .count();
        let potions = deck
            .iter()
            .filter(|c| c.category() == Some(CardCategory::Potion))
            .count();
        let monsters = deck
            .iter()
            .filter(|c| c.category() == Some(CardCategory::Monster))
            .count();

        assert_eq!(weapons, 9);
        assert_eq!(potions, 9);
        assert_eq!(monsters, 26);
    }

    #[test]
    fn test_no_duplicate_cards() {
        let mut deck = ScoundrelDeck.create_deck();
        let len = deck.len();
        deck.sort_by_key(|c| (c.suit, c.rank));
        deck.dedup();
        assert_eq!(deck.len(), len);
    }

    #[test]
    fn test_no_weapon_or_potion_faces() {
        let deck = ScoundrelDeck.create_deck();
        assert!(deck
            .iter()
            .filter(|c| !c.rank.is_number())
            .all(|c| c.suit == Suit::Spades || c.suit == Suit::Clubs));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let deck = ScoundrelDeck.create_deck();
        let mut rng = GameRng::new(42);

        let mut shuffled = ScoundrelDeck.shuffle_deck(deck.clone(), &mut rng, 3);
        assert_ne!(shuffled, deck);

        let mut sorted = deck;
        sorted.sort_by_key(|c| (c.suit, c.rank));
        shuffled.sort_by_key(|c| (c.suit, c.rank));
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let deck = ScoundrelDeck.create_deck();

        let a = ScoundrelDeck.shuffle_deck(deck.clone(), &mut GameRng::new(7), 3);
        let b = ScoundrelDeck.shuffle_deck(deck.clone(), &mut GameRng::new(7), 3);
        let single = ScoundrelDeck.shuffle_deck(deck, &mut GameRng::new(7), 1);

        assert_eq!(a, b);
        assert_ne!(a, single);
    }

    #[test]
    fn test_zero_passes_keeps_order() {
        let deck = ScoundrelDeck.create_deck();
        let same = ScoundrelDeck.shuffle_deck(deck.clone(), &mut GameRng::new(1), 0);
        assert_eq!(deck, same);
    }
}
