//! Effect system for action cards.
//!
//! - `Effect`: Closed enumeration of what an action card can do
//! - `EffectContext`: Capability handle over the acting player's own state
//! - `EffectResolver`: Walks an effect against a context
//!
//! An effect cannot reach the supply or another player's deck: the only
//! operations available to it are the ones on `EffectContext`.

mod effect;
mod resolver;

pub use effect::Effect;
pub use resolver::{EffectContext, EffectResolver, EffectSummary};
