//! Card value types and their Scoundrel categorisation.
//!
//! A card is a suit plus a rank. Everything the rules care about (is this a
//! weapon, how much does this monster hit for) is derived from those two
//! fields on demand and never stored.
//!
//! ## Suit roles
//!
//! | Suit | Role | Ranks in the dungeon |
//! |------|------|----------------------|
//! | Diamonds | weapon | 2-10 |
//! | Hearts | potion | 2-10 |
//! | Clubs, Spades | monster | 2-10, J, Q, K, A |

use serde::{Deserialize, Serialize};

/// The four suits of a standard deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

    /// Printed colour of the suit.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Suit::Diamonds | Suit::Hearts => SuitColor::Red,
            Suit::Spades | Suit::Clubs => SuitColor::Black,
        }
    }

    /// The role every card of this suit plays in the dungeon.
    #[must_use]
    pub const fn category(self) -> CardCategory {
        match self {
            Suit::Diamonds => CardCategory::Weapon,
            Suit::Hearts => CardCategory::Potion,
            Suit::Spades | Suit::Clubs => CardCategory::Monster,
        }
    }

    /// Whether face cards of this suit are part of the dungeon.
    #[must_use]
    pub const fn has_faces(self) -> bool {
        matches!(self.category(), CardCategory::Monster)
    }

    const fn symbol(self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }
}

/// Red or black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitColor {
    Red,
    Black,
}

/// Face ranks. Only monsters come in faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Jack,
    Queen,
    King,
    Ace,
}

impl Face {
    /// All faces, lowest first.
    pub const ALL: [Face; 4] = [Face::Jack, Face::Queen, Face::King, Face::Ace];

    /// Combat strength of a face-card monster.
    #[must_use]
    pub const fn strength(self) -> i32 {
        match self {
            Face::Jack => 11,
            Face::Queen => 12,
            Face::King => 13,
            Face::Ace => 14,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Face::Jack => 'J',
            Face::Queen => 'Q',
            Face::King => 'K',
            Face::Ace => 'A',
        }
    }
}

/// A card's rank: a pip value or a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    /// Pip card, 2 through 10.
    Number(u8),
    /// Jack, Queen, King or Ace.
    Face(Face),
}

impl Rank {
    /// Lowest pip value in the deck.
    pub const MIN_NUMBER: u8 = 2;
    /// Highest pip value in the deck.
    pub const MAX_NUMBER: u8 = 10;

    /// Numeric value: the pip count, or the face's strength.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Rank::Number(n) => n as i32,
            Rank::Face(face) => face.strength(),
        }
    }

    /// Whether this is a pip card.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Rank::Number(_))
    }
}

/// What a card does when it is resolved from the room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    /// Can be equipped; absorbs monster damage up to its value.
    Weapon,
    /// Heals, or can be thrown away.
    Potion,
    /// Must be fought, bare-handed or with the equipped weapon.
    Monster,
}

/// An immutable playing card, compared by value.
///
/// ## Example
///
/// ```
/// use scoundrel_engine::cards::{Card, CardCategory, Face, Suit};
///
/// let sword = Card::number(7, Suit::Diamonds);
/// assert_eq!(sword.category(), Some(CardCategory::Weapon));
/// assert_eq!(sword.weapon_value(), Some(7));
///
/// let boss = Card::face(Face::Ace, Suit::Spades);
/// assert_eq!(boss.monster_strength(), Some(14));
/// assert_eq!(boss.to_string(), "A♠");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a pip card.
    #[must_use]
    pub const fn number(value: u8, suit: Suit) -> Self {
        Self {
            suit,
            rank: Rank::Number(value),
        }
    }

    /// Create a face card.
    #[must_use]
    pub const fn face(face: Face, suit: Suit) -> Self {
        Self {
            suit,
            rank: Rank::Face(face),
        }
    }

    /// The card's role, or `None` for face cards of the weapon and potion
    /// suits, which have no use in this variant.
    #[must_use]
    pub const fn category(&self) -> Option<CardCategory> {
        match (self.suit.category(), self.rank) {
            (CardCategory::Monster, _) => Some(CardCategory::Monster),
            (category, Rank::Number(_)) => Some(category),
            (_, Rank::Face(_)) => None,
        }
    }

    #[must_use]
    pub const fn is_weapon(&self) -> bool {
        matches!(self.category(), Some(CardCategory::Weapon))
    }

    #[must_use]
    pub const fn is_potion(&self) -> bool {
        matches!(self.category(), Some(CardCategory::Potion))
    }

    #[must_use]
    pub const fn is_monster(&self) -> bool {
        matches!(self.category(), Some(CardCategory::Monster))
    }

    /// Damage absorbed when this card is the equipped weapon.
    #[must_use]
    pub const fn weapon_value(&self) -> Option<i32> {
        if self.is_weapon() {
            Some(self.rank.value())
        } else {
            None
        }
    }

    /// Health restored by drinking this card.
    #[must_use]
    pub const fn potion_value(&self) -> Option<i32> {
        if self.is_potion() {
            Some(self.rank.value())
        } else {
            None
        }
    }

    /// Damage dealt by this monster.
    #[must_use]
    pub const fn monster_strength(&self) -> Option<i32> {
        if self.is_monster() {
            Some(self.rank.value())
        } else {
            None
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            Rank::Number(n) => write!(f, "{}{}", n, self.suit.symbol()),
            Rank::Face(face) => write!(f, "{}{}", face.symbol(), self.suit.symbol()),
        }
    }
}
