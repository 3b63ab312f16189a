//! Error types.
//!
//! Failures come in two classes:
//!
//! - [`EngineError`]: contract violations (bad hand index, empty pile,
//!   unknown card). The offending operation is aborted and nothing changes.
//! - [`Rejection`]: expected policy outcomes (no actions left, cannot
//!   afford). The caller is expected to issue a corrected decision.
//!
//! [`TurnError`] wraps both for operations that can fail either way.

use thiserror::Error;

use crate::turn::TurnPhase;

/// Contract violations raised by the deck and supply.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("pile '{card}' is exhausted")]
    PileExhausted { card: String },

    #[error("hand index {index} out of range (hand has {len} cards)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("card '{card}' has no pile in the supply")]
    CardNotInSupply { card: String },

    #[error("cannot shuffle discard into a non-empty draw pile ({remaining} cards left)")]
    DrawPileNotEmpty { remaining: usize },
}

/// Policy rejections. Retryable: state is untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no actions remaining to play '{card}'")]
    NoActionsRemaining { card: String },

    #[error("'{card}' cannot be played")]
    NotPlayable { card: String },

    #[error("no buys remaining")]
    NoBuysRemaining,

    #[error("no supply pile named '{name}'")]
    UnknownCard { name: String },

    #[error("the '{name}' pile is empty")]
    PileEmpty { name: String },

    #[error("'{name}' costs {cost} but only {money} money is available")]
    CannotAfford { name: String, cost: u32, money: i64 },

    #[error("not allowed during the {actual:?} phase (expected {expected:?})")]
    WrongPhase { expected: TurnPhase, actual: TurnPhase },
}

/// Failure of a single turn operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl TurnError {
    /// True for policy rejections, false for contract violations.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, TurnError::Rejected(_))
    }
}

/// Invalid game construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    #[error("card '{0}' is not in the catalog")]
    UnknownCard(String),

    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("game-over threshold must be at least 1")]
    ZeroThreshold,

    #[error("expected {expected} decision providers, got {actual}")]
    ProviderCountMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_error_from_rejection() {
        let err: TurnError = Rejection::NoBuysRemaining.into();
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "rejected: no buys remaining");
    }

    #[test]
    fn test_turn_error_from_engine() {
        let err: TurnError = EngineError::IndexOutOfRange { index: 7, len: 5 }.into();
        assert!(!err.is_rejection());
        assert_eq!(err.to_string(), "hand index 7 out of range (hand has 5 cards)");
    }

    #[test]
    fn test_cannot_afford_message() {
        let rejection = Rejection::CannotAfford {
            name: "province".to_string(),
            cost: 8,
            money: 3,
        };
        assert_eq!(
            rejection.to_string(),
            "'province' costs 8 but only 3 money is available"
        );
    }
}
