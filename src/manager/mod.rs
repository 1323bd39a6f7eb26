//! Game orchestration: serialised mutation and state publication.
//!
//! ## Key Types
//!
//! - `GameManager`: Owns the game state and applies every transition
//! - `GamePhase`: Uninitialised, Active or Finished
//! - `StatePublisher`: Latest-value cell with ordered push notification
//! - `StateSubscription`: A subscriber's view of the published states

pub mod game_manager;
pub mod publisher;

pub use game_manager::{GameManager, GamePhase};
pub use publisher::{Snapshot, StatePublisher, StateSubscription};
