//! Game orchestrator.
//!
//! `GameManager` owns the one mutable cell of a game. Every mutation
//! (initialise, move, room advance, room skip, clear) takes the same
//! async mutex and holds it across read, validate, apply, derive and
//! publish, so no two transitions interleave and no partially applied
//! state is ever observable. The mutex also guards the RNG, which only
//! transitions use.
//!
//! Queries read the last published snapshot without taking the mutex.
//! They may lag a transition in flight; every mutation validates again
//! under the lock.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::publisher::{Snapshot, StatePublisher, StateSubscription};
use crate::cards::{DeckBuilder, ScoundrelDeck};
use crate::core::{EngineConfig, EngineError, GameMove, GameRng, GameState};
use crate::rules::{room, RulesEngine, ScoundrelRules};

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// No game; `initialise` has not run, or `clear` has.
    Uninitialised,
    /// A game is in progress.
    Active,
    /// The game has ended; only `initialise` and `clear` do anything.
    Finished,
}

impl GamePhase {
    /// Phase of a published snapshot.
    #[must_use]
    pub fn of(state: Option<&GameState>) -> Self {
        match state {
            None => GamePhase::Uninitialised,
            Some(state) if state.is_finished() => GamePhase::Finished,
            Some(_) => GamePhase::Active,
        }
    }
}

/// Serialised access to a single Scoundrel game.
///
/// ## Usage
///
/// ```
/// use scoundrel_engine::core::EngineConfig;
/// use scoundrel_engine::manager::{GameManager, GamePhase};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let manager = GameManager::new(EngineConfig::default().with_seed(42));
/// assert_eq!(manager.phase(), GamePhase::Uninitialised);
///
/// manager.initialise().await.unwrap();
/// let state = manager.current().unwrap();
/// assert_eq!(state.health_points, 20);
/// assert_eq!(state.room_size(), 4);
/// # });
/// ```
pub struct GameManager<R: RulesEngine = ScoundrelRules> {
    rules: R,
    deck_builder: Box<dyn DeckBuilder>,
    config: EngineConfig,
    mutation: Mutex<GameRng>,
    publisher: StatePublisher,
}

impl GameManager<ScoundrelRules> {
    /// A manager using the standard rules and dungeon.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(config, ScoundrelRules, ScoundrelDeck)
    }
}

impl Default for GameManager<ScoundrelRules> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RulesEngine> GameManager<R> {
    /// A manager with custom rules and dungeon construction.
    #[must_use]
    pub fn with_parts(config: EngineConfig, rules: R, deck_builder: impl DeckBuilder + 'static) -> Self {
        let rng = GameRng::from_seed(config.seed);
        Self {
            rules,
            deck_builder: Box::new(deck_builder),
            config,
            mutation: Mutex::new(rng),
            publisher: StatePublisher::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    // === Queries ===

    /// The latest published state, `None` if no game is in progress.
    #[must_use]
    pub fn current(&self) -> Snapshot {
        self.publisher.current()
    }

    /// Observe the state: the current value first, then every change.
    #[must_use]
    pub fn subscribe(&self) -> StateSubscription {
        self.publisher.subscribe()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        GamePhase::of(self.current().as_deref())
    }

    /// Whether `mv` is legal against the latest published state.
    #[must_use]
    pub fn is_valid_move(&self, mv: &GameMove) -> bool {
        self.active_state()
            .is_some_and(|state| self.rules.is_valid_move(&state, mv))
    }

    /// Whether `advance_room` would currently do something.
    #[must_use]
    pub fn can_advance_room(&self) -> bool {
        self.active_state()
            .is_some_and(|state| room::can_advance_room(&state))
    }

    /// Whether `skip_room` would currently do something.
    #[must_use]
    pub fn can_skip_room(&self) -> bool {
        self.active_state()
            .is_some_and(|state| state.can_skip_current_room)
    }

    // === Mutations ===

    /// Start a new game, replacing any game in progress.
    ///
    /// On error nothing is published and the previous state remains.
    #[instrument(level = "debug", skip(self))]
    pub async fn initialise(&self) -> Result<(), EngineError> {
        let mut rng = self.mutation.lock().await;

        let deck = self.deck_builder.create_deck();
        let deck = self
            .deck_builder
            .shuffle_deck(deck, &mut rng, self.config.shuffle_passes);
        let opening = room::open_dungeon(deck.into_iter().collect())
            .inspect_err(|err| warn!(%err, "dungeon could not be opened"))?;

        let state = self.rules.derive(opening);
        info!(
            seed = rng.seed(),
            dungeon = state.dungeon_deck.len(),
            "dungeon opened"
        );
        self.commit(state);
        Ok(())
    }

    /// Apply `mv` if it is legal. Returns whether it was applied.
    #[instrument(level = "debug", skip(self))]
    pub async fn make_move(&self, mv: GameMove) -> bool {
        let _guard = self.mutation.lock().await;

        let Some(current) = self.active_state() else {
            debug!("no game in progress");
            return false;
        };
        if !self.rules.is_valid_move(&current, &mv) {
            debug!(%mv, "move rejected");
            return false;
        }

        let next = self.rules.derive(self.rules.apply_move(&current, &mv));
        debug!(%mv, hp = next.health_points, "move applied");
        self.commit(next);
        true
    }

    /// Refill the room once it is down to its last card.
    ///
    /// Returns `Ok(false)` without changing anything if the room is not
    /// ready to advance.
    #[instrument(level = "debug", skip(self))]
    pub async fn advance_room(&self) -> Result<bool, EngineError> {
        let _guard = self.mutation.lock().await;

        let Some(current) = self.active_state() else {
            return Ok(false);
        };
        if !room::can_advance_room(&current) {
            debug!(room = current.room_size(), "room not ready to advance");
            return Ok(false);
        }

        let next = room::advance_room(&current)
            .inspect_err(|err| warn!(%err, "room could not be advanced"))?;
        self.commit(self.rules.derive(next));
        Ok(true)
    }

    /// Skip an untouched room.
    ///
    /// Returns `Ok(false)` without changing anything if skipping is not
    /// currently allowed.
    #[instrument(level = "debug", skip(self))]
    pub async fn skip_room(&self) -> Result<bool, EngineError> {
        let mut rng = self.mutation.lock().await;

        let Some(current) = self.active_state() else {
            return Ok(false);
        };
        if !room::can_skip_room(&current) {
            debug!("room cannot be skipped");
            return Ok(false);
        }

        let next = room::skip_room(&current, &mut rng)
            .inspect_err(|err| warn!(%err, "room could not be skipped"))?;
        self.commit(self.rules.derive(next));
        Ok(true)
    }

    /// Drop the game in progress.
    #[instrument(level = "debug", skip(self))]
    pub async fn clear(&self) {
        let _guard = self.mutation.lock().await;
        self.publisher.publish(None);
        info!("game cleared");
    }

    /// Latest state, if a game is running and not finished.
    fn active_state(&self) -> Option<Arc<GameState>> {
        self.current().filter(|state| !state.is_finished())
    }

    fn commit(&self, next: GameState) {
        if let Some(finish) = next.finish_state {
            info!(
                score = finish.final_score,
                outcome = ?finish.outcome(),
                "game finished"
            );
        }
        self.publisher.publish(Some(Arc::new(next)));
    }
}
