//! Engine errors.
//!
//! Illegal moves are not errors: they are rejected with a `false` result.
//! `EngineError` is reserved for states correct play can never reach.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("not enough cards to form a room: needed {needed}, {available} available")]
    InsufficientCards { needed: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EngineError::InsufficientCards {
            needed: 4,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "not enough cards to form a room: needed 4, 2 available"
        );
    }
}
