//! Turn resolution: counters, phases, and the decision seam.

pub mod decision;
pub mod resolver;
pub mod state;

pub use decision::{ActionDecision, ActionView, BuyDecision, BuyView, DecisionProvider};
pub use resolver::{Purchase, TurnHandle, TurnPhase, TurnResolver};
pub use state::TurnState;
