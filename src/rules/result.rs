//! Final standings of a finished game.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The number of empty supply piles reached the threshold.
    EmptyPiles,
    /// A pile whose card ends the game ran out.
    EndingPileExhausted(String),
    /// The configured turn limit was reached first.
    TurnLimit,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::EmptyPiles => write!(f, "supply piles exhausted"),
            EndReason::EndingPileExhausted(name) => write!(f, "{name} pile exhausted"),
            EndReason::TurnLimit => write!(f, "turn limit reached"),
        }
    }
}

/// Who won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(PlayerId),
    /// Tied for the top score.
    Winners(Vec<PlayerId>),
}

impl Outcome {
    /// Check if a player won (alone or tied).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            Outcome::Winner(p) => *p == player,
            Outcome::Winners(ps) => ps.contains(&player),
        }
    }
}

/// One seat's final position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: i64,
    /// Every card the player owns, by name.
    pub cards: BTreeMap<String, u32>,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// In seat order.
    pub standings: Vec<Standing>,
    pub outcome: Outcome,
    pub end_reason: EndReason,
    /// Turns played, across all seats.
    pub turns: u32,
}

impl GameResult {
    /// Build a result, picking the top score as the winner.
    #[must_use]
    pub fn new(standings: Vec<Standing>, end_reason: EndReason, turns: u32) -> Self {
        let best = standings.iter().map(|s| s.score).max().unwrap_or_default();

        let mut leaders: Vec<PlayerId> = standings
            .iter()
            .filter(|s| s.score == best)
            .map(|s| s.player)
            .collect();

        let outcome = if leaders.len() == 1 {
            Outcome::Winner(leaders.remove(0))
        } else {
            Outcome::Winners(leaders)
        };

        Self {
            standings,
            outcome,
            end_reason,
            turns,
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.outcome.is_winner(player)
    }

    #[must_use]
    pub fn standing(&self, player: PlayerId) -> Option<&Standing> {
        self.standings.iter().find(|s| s.player == player)
    }
}
