//! Core engine types: state, moves, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod moves;
pub mod rng;
pub mod state;

pub use config::{EngineConfig, MAX_HP, ROOM_SIZE};
pub use error::EngineError;
pub use moves::GameMove;
pub use rng::{GameRng, GameRngState};
pub use state::{FinishState, GameState, Outcome, RoomState};
