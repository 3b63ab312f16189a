//! Effect definitions.
//!
//! Effects are the atomic things an action card can do. They only ever
//! touch the acting player's own deck and turn counters.

use serde::{Deserialize, Serialize};

/// An action card effect.
///
/// ## Player Effects
///
/// - `DrawCards`: Draw from the player's own draw pile
/// - `AddActions` / `AddBuys` / `AddMoney`: Grant turn resources
/// - `ReshuffleDiscard`: Shuffle the discard back into the draw pile
///   even though cards remain in it
///
/// ## Composite
///
/// - `Batch`: Execute multiple effects in sequence
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    DrawCards(u32),
    AddActions(u32),
    AddBuys(u32),
    AddMoney(u32),
    ReshuffleDiscard,

    /// Execute multiple effects in sequence.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Create a draw cards effect.
    pub fn draw(count: u32) -> Self {
        Self::DrawCards(count)
    }

    /// Create a +actions effect.
    pub fn actions(count: u32) -> Self {
        Self::AddActions(count)
    }

    /// Create a +buys effect.
    pub fn buys(count: u32) -> Self {
        Self::AddBuys(count)
    }

    /// Create a +money effect.
    pub fn money(amount: u32) -> Self {
        Self::AddMoney(amount)
    }

    /// Create a batch of effects.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }
}
