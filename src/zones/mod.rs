//! Player card zones.
//!
//! ## Key Types
//!
//! - `Zone`: Selector for one of a player's four card locations
//! - `Deck`: The four zones and the transitions between them

pub mod deck;

pub use deck::Deck;

use serde::{Deserialize, Serialize};

/// One of a player's card locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Cards available to play this turn.
    Hand,
    /// Face-down cards, drawn from the top.
    Draw,
    /// Face-up cards, shuffled into the draw pile when it runs out.
    Discard,
    /// Cards played this turn.
    InPlay,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Hand, Zone::Draw, Zone::Discard, Zone::InPlay];
}
