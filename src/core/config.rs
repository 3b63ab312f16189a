//! Game configuration.
//!
//! Everything a game needs besides the card catalog is given here:
//! - Player names (seat order)
//! - Starting deck composition
//! - Hand size, supply pile size overrides, game-over threshold
//! - RNG seed and engine limits
//!
//! Configuration is validated against the catalog when the engine is built.

use rustc_hash::FxHashMap;

use super::error::ConfigError;
use crate::cards::{Card, CardCatalog};
use crate::supply::DEFAULT_GAME_OVER_THRESHOLD;

/// Cards drawn at the end of every turn.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Default cap on rejected decisions within one phase.
pub const DEFAULT_MAX_REJECTIONS: u32 = 64;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::core::GameConfig;
///
/// let config = GameConfig::new(["pink", "blue"])
///     .with_seed(7)
///     .with_pile_size("province", 8);
///
/// assert_eq!(config.player_count(), 2);
/// assert_eq!(config.hand_size, 5);
/// assert_eq!(config.game_over_threshold, 3);
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Player names, in seat order.
    pub player_names: Vec<String>,

    /// Starting deck as (card name, copies).
    pub starting_deck: Vec<(String, u32)>,

    /// Cards drawn at cleanup.
    pub hand_size: usize,

    /// Supply pile sizes that differ from the catalog.
    pub pile_sizes: FxHashMap<String, u32>,

    /// Number of empty piles that ends the game.
    pub game_over_threshold: usize,

    /// Seed for every shuffle in the game.
    pub seed: u64,

    /// Stop after this many turns even if the supply is not depleted.
    pub turn_limit: Option<u32>,

    /// Rejected decisions tolerated in a single phase before it is ended.
    pub max_rejections_per_phase: u32,
}

impl GameConfig {
    /// Standard setup for the named players: 7 copper + 3 estate each.
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>) -> Self {
        Self {
            player_names: players.into_iter().map(Into::into).collect(),
            starting_deck: vec![("copper".to_string(), 7), ("estate".to_string(), 3)],
            hand_size: DEFAULT_HAND_SIZE,
            pile_sizes: FxHashMap::default(),
            game_over_threshold: DEFAULT_GAME_OVER_THRESHOLD,
            seed: 0,
            turn_limit: None,
            max_rejections_per_phase: DEFAULT_MAX_REJECTIONS,
        }
    }

    /// Replace the starting deck composition.
    #[must_use]
    pub fn with_starting_deck<S: Into<String>>(
        mut self,
        cards: impl IntoIterator<Item = (S, u32)>,
    ) -> Self {
        self.starting_deck = cards.into_iter().map(|(n, c)| (n.into(), c)).collect();
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Override one supply pile's size.
    #[must_use]
    pub fn with_pile_size(mut self, card: impl Into<String>, count: u32) -> Self {
        self.pile_sizes.insert(card.into(), count);
        self
    }

    #[must_use]
    pub fn with_game_over_threshold(mut self, threshold: usize) -> Self {
        self.game_over_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = Some(turns);
        self
    }

    #[must_use]
    pub fn with_max_rejections(mut self, max: u32) -> Self {
        self.max_rejections_per_phase = max;
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check the configuration against a catalog.
    pub fn validate(&self, catalog: &CardCatalog) -> Result<(), ConfigError> {
        match self.player_count() {
            0 => return Err(ConfigError::NoPlayers),
            n if n > 255 => return Err(ConfigError::TooManyPlayers(n)),
            _ => {}
        }
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.game_over_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }

        let names = self
            .starting_deck
            .iter()
            .map(|(name, _)| name)
            .chain(self.pile_sizes.keys());
        for name in names {
            if !catalog.contains(name) {
                return Err(ConfigError::UnknownCard(name.clone()));
            }
        }

        Ok(())
    }

    /// Fresh starting cards for one player.
    pub fn starting_cards(&self, catalog: &CardCatalog) -> Result<Vec<Card>, ConfigError> {
        let mut cards = Vec::new();
        for (name, count) in &self.starting_deck {
            let copies = catalog
                .copies(name, *count)
                .ok_or_else(|| ConfigError::UnknownCard(name.clone()))?;
            cards.extend(copies);
        }
        Ok(cards)
    }
}
