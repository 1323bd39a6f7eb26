//! # scoundrel-engine
//!
//! Rules engine for Scoundrel, a solitaire dungeon crawl played with a
//! standard deck.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Validation, move application, room handling and
//!    scoring are pure functions from one `GameState` to the next.
//!
//! 2. **Copy-on-Write State**: States are never mutated once published.
//!    `im` persistent vectors make each new state cheap to produce.
//!
//! 3. **Serialised Mutation**: `GameManager` runs each transition under a
//!    single async lock, so concurrent callers always see whole states.
//!
//! ## Modules
//!
//! - `cards`: Card model and dungeon construction
//! - `core`: State, moves, RNG, configuration, errors
//! - `rules`: Validator, executor, room lifecycle, finish evaluation
//! - `manager`: Orchestrator and state publication

pub mod cards;
pub mod core;
pub mod manager;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, CardCategory, DeckBuilder, Face, Rank, ScoundrelDeck, Suit, SuitColor};

pub use crate::core::{
    EngineConfig, EngineError, FinishState, GameMove, GameRng, GameRngState, GameState, Outcome,
    RoomState, MAX_HP, ROOM_SIZE,
};

pub use crate::rules::{RulesEngine, ScoundrelRules};

pub use crate::manager::{GameManager, GamePhase, Snapshot, StatePublisher, StateSubscription};
