//! Scoundrel rules.
//!
//! Each concern is a set of pure functions over `GameState`:
//! - `validator`: move legality
//! - `executor`: move application
//! - `room`: forming, advancing and skipping rooms
//! - `finish`: end-of-game detection and scoring
//!
//! `RulesEngine` bundles them behind the trait the orchestrator uses.

pub mod engine;
pub mod executor;
pub mod finish;
pub mod room;
pub mod validator;

pub use engine::{RulesEngine, ScoundrelRules};
