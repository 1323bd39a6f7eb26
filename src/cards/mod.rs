//! Card system: value types and dungeon construction.
//!
//! ## Key Types
//!
//! - `Card`: Suit plus rank, compared by value
//! - `CardCategory`: Weapon, potion or monster, derived from the suit
//! - `DeckBuilder`: Builds and shuffles a dungeon
//! - `ScoundrelDeck`: The standard 44-card dungeon

pub mod card;
pub mod deck;

pub use card::{Card, CardCategory, Face, Rank, Suit, SuitColor};
pub use deck::{DeckBuilder, ScoundrelDeck};
