//! Core engine types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_HAND_SIZE, DEFAULT_MAX_REJECTIONS};
pub use error::{ConfigError, EngineError, Rejection, TurnError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
