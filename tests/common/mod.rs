//! Shared helpers for integration tests.

#![allow(dead_code)]

use scoundrel_engine::cards::{Card, DeckBuilder};
use scoundrel_engine::core::{EngineError, GameMove, GameRng, GameState};
use scoundrel_engine::rules::{room, RulesEngine};

/// Deals the given cards unshuffled. The last four form the first room.
pub struct FixedDeck(pub Vec<Card>);

impl DeckBuilder for FixedDeck {
    fn create_deck(&self) -> Vec<Card> {
        self.0.clone()
    }

    fn shuffle_deck(&self, deck: Vec<Card>, _rng: &mut GameRng, _passes: u32) -> Vec<Card> {
        deck
    }
}

/// Anything the player can do in a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Move(GameMove),
    AdvanceRoom,
    SkipRoom,
}

/// Every action the rules accept in `state`.
pub fn available_actions<R: RulesEngine>(rules: &R, state: &GameState) -> Vec<PlayerAction> {
    if state.is_finished() {
        return Vec::new();
    }

    let mut actions: Vec<_> = rules
        .legal_moves(state)
        .into_iter()
        .map(PlayerAction::Move)
        .collect();
    if room::can_advance_room(state) {
        actions.push(PlayerAction::AdvanceRoom);
    }
    if room::can_skip_room(state) {
        actions.push(PlayerAction::SkipRoom);
    }
    actions
}

/// Apply one action the same way the orchestrator does.
pub fn step<R: RulesEngine>(
    rules: &R,
    state: &GameState,
    action: PlayerAction,
    rng: &mut GameRng,
) -> Result<GameState, EngineError> {
    let next = match action {
        PlayerAction::Move(mv) => rules.apply_move(state, &mv),
        PlayerAction::AdvanceRoom => room::advance_room(state)?,
        PlayerAction::SkipRoom => room::skip_room(state, rng)?,
    };
    Ok(rules.derive(next))
}

/// Route engine logs to the test harness. Safe to call from every test.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,scoundrel_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
