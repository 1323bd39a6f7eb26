//! Player moves.
//!
//! Every move targets exactly one card in the current room. Room-level
//! actions (advancing to the next room, skipping a room) are not moves;
//! they live on the orchestrator.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A move the player can attempt against a card in the room.
///
/// ## Example
///
/// ```
/// use scoundrel_engine::cards::{Card, Suit};
/// use scoundrel_engine::core::GameMove;
///
/// let goblin = Card::number(6, Suit::Clubs);
/// let fight = GameMove::fight_bare_handed(goblin);
/// assert_eq!(fight.card(), goblin);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMove {
    /// Equip a weapon, throwing away the current weapon stack.
    EquipWeapon(Card),
    /// Fight a monster, either with the equipped weapon or bare-handed.
    FightMonster { card: Card, bare_handed: bool },
    /// Drink a potion.
    UsePotion(Card),
    /// Throw a potion away without drinking it.
    DiscardPotion(Card),
}

impl GameMove {
    /// Fight `card` using the equipped weapon.
    #[must_use]
    pub const fn fight_with_weapon(card: Card) -> Self {
        GameMove::FightMonster {
            card,
            bare_handed: false,
        }
    }

    /// Fight `card` without a weapon.
    #[must_use]
    pub const fn fight_bare_handed(card: Card) -> Self {
        GameMove::FightMonster {
            card,
            bare_handed: true,
        }
    }

    /// The card this move acts on.
    #[must_use]
    pub const fn card(&self) -> Card {
        match *self {
            GameMove::EquipWeapon(card)
            | GameMove::FightMonster { card, .. }
            | GameMove::UsePotion(card)
            | GameMove::DiscardPotion(card) => card,
        }
    }
}

impl std::fmt::Display for GameMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMove::EquipWeapon(card) => write!(f, "equip {card}"),
            GameMove::FightMonster {
                card,
                bare_handed: true,
            } => write!(f, "fight {card} bare-handed"),
            GameMove::FightMonster { card, .. } => write!(f, "fight {card} with weapon"),
            GameMove::UsePotion(card) => write!(f, "drink {card}"),
            GameMove::DiscardPotion(card) => write!(f, "discard {card}"),
        }
    }
}
