//! Engine configuration and fixed rule constants.

use serde::{Deserialize, Serialize};

/// Maximum (and starting) health.
pub const MAX_HP: i32 = 20;

/// Number of cards in a full room.
pub const ROOM_SIZE: usize = 4;

/// Engine configuration.
///
/// Only the randomness of a game is configurable; the rules themselves are
/// fixed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for dungeon shuffles.
    /// `None` draws a fresh seed from the OS for every engine.
    pub seed: Option<u64>,

    /// How many times the freshly built deck is shuffled.
    /// One pass is already uniform; three matches historical dungeons.
    pub shuffle_passes: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_passes: 3,
        }
    }
}

impl EngineConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of shuffle passes.
    #[must_use]
    pub fn with_shuffle_passes(mut self, passes: u32) -> Self {
        self.shuffle_passes = passes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.shuffle_passes, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_seed(123).with_shuffle_passes(1);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.shuffle_passes, 1);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.shuffle_passes, 3);
    }
}
