//! Game loop and results.
//!
//! `GameEngine` drives turns across seats until the supply is depleted
//! (or a turn limit is hit) and reports a `GameResult`.

pub mod engine;
pub mod result;

pub use engine::{GameEngine, TurnSummary};
pub use result::{EndReason, GameResult, Outcome, Standing};
