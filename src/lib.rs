//! # rust-deckbuilder
//!
//! A turn-resolution engine for Dominion-style deck-building games.
//!
//! ## Design Principles
//!
//! 1. **No hidden decisions**: every choice goes through a
//!    `DecisionProvider`. The engine only validates and applies.
//!
//! 2. **N-Player First**: seats are a `PlayerMap`, the rotation is a
//!    `PlayerId` advanced modulo the seat count.
//!
//! 3. **Cards as data**: a card is a plain descriptor. Action cards carry a
//!    closed `Effect` value that is resolved against a capability handle
//!    scoped to the acting player.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: deck zones are `im` vectors, so a whole
//!   `GameEngine` clones in O(1) for lookahead.
//!
//! - **Deterministic**: all shuffling goes through `GameRng` streams derived
//!   from one seed. Same seed, same decisions, same game.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `cards`: card descriptors, the catalog, the base card set
//! - `effects`: action-card effects and their resolver
//! - `zones`: a player's four zones and the moves between them
//! - `supply`: purchasable piles and game-over detection
//! - `turn`: per-turn counters, phases, and the decision seam
//! - `rules`: the game loop and final results
//! - `agents`: built-in decision providers

pub mod core;
pub mod cards;
pub mod effects;
pub mod zones;
pub mod supply;
pub mod turn;
pub mod rules;
pub mod agents;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Player,
    GameRng, GameConfig,
    ConfigError, EngineError, Rejection, TurnError,
};

pub use crate::cards::{base_catalog, Card, CardKind, CardCatalog};

pub use crate::effects::{Effect, EffectContext, EffectResolver, EffectSummary};

pub use crate::zones::{Deck, Zone};

pub use crate::supply::{Pile, Supply};

pub use crate::turn::{
    TurnState, TurnPhase, TurnResolver, Purchase,
    ActionDecision, BuyDecision, ActionView, BuyView, DecisionProvider,
};

pub use crate::rules::{GameEngine, TurnSummary, GameResult, Standing, Outcome, EndReason};

pub use crate::agents::{Scripted, BigMoney, RandomAgent};
