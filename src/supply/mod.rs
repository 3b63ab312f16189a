//! The shared supply of purchasable cards.
//!
//! ## Key Types
//!
//! - `Pile`: A counted stack of one card
//! - `Supply`: All piles, with game-over detection
//!
//! ## Game Over
//!
//! The game is over as soon as either:
//! - the number of empty piles reaches the threshold (default 3), or
//! - any pile whose card ends the game (province) is empty.

mod pile;

pub use pile::Pile;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::cards::{Card, CardCatalog};
use crate::core::{ConfigError, EngineError};

/// Default number of empty piles that ends the game.
pub const DEFAULT_GAME_OVER_THRESHOLD: usize = 3;

/// The collection of supply piles.
///
/// Piles keep their construction order; lookup by card name is O(1).
#[derive(Clone, Debug)]
pub struct Supply {
    piles: Vec<Pile>,
    index: FxHashMap<String, usize>,
    empty_piles: usize,
    game_over_threshold: usize,
}

impl Supply {
    /// Create a supply from piles.
    ///
    /// Panics if two piles hold the same card.
    #[must_use]
    pub fn new(piles: Vec<Pile>, game_over_threshold: usize) -> Self {
        let mut index = FxHashMap::default();
        for (i, pile) in piles.iter().enumerate() {
            if index.insert(pile.card().name.clone(), i).is_some() {
                panic!("Duplicate supply pile {:?}", pile.card().name);
            }
        }
        let empty_piles = piles.iter().filter(|p| p.is_empty()).count();

        Self {
            piles,
            index,
            empty_piles,
            game_over_threshold,
        }
    }

    /// One pile per catalog card, sized from the catalog unless overridden.
    pub fn from_catalog(
        catalog: &CardCatalog,
        overrides: &FxHashMap<String, u32>,
        game_over_threshold: usize,
    ) -> Result<Self, ConfigError> {
        if let Some(unknown) = overrides.keys().find(|name| !catalog.contains(name)) {
            return Err(ConfigError::UnknownCard(unknown.clone()));
        }

        let piles = catalog
            .iter()
            .map(|entry| {
                let count = overrides
                    .get(&entry.card.name)
                    .copied()
                    .unwrap_or(entry.pile_size);
                Pile::new(entry.card.clone(), count)
            })
            .collect();

        Ok(Self::new(piles, game_over_threshold))
    }

    fn pile_index(&self, card: &Card) -> Result<usize, EngineError> {
        self.index
            .get(&card.name)
            .copied()
            .ok_or_else(|| EngineError::CardNotInSupply {
                card: card.name.clone(),
            })
    }

    /// Take one `card` from its pile.
    ///
    /// Returns whether the game is now over.
    pub fn remove_one(&mut self, card: &Card) -> Result<bool, EngineError> {
        let i = self.pile_index(card)?;
        let pile = &mut self.piles[i];
        pile.remove_one()?;

        if pile.is_empty() {
            self.empty_piles += 1;
            info!(pile = %card.name, empty_piles = self.empty_piles, "supply pile emptied");
        }

        debug_assert_eq!(
            self.empty_piles,
            self.piles.iter().filter(|p| p.is_empty()).count()
        );
        Ok(self.is_game_over())
    }

    /// Return one `card` to its pile. Piles are never created here.
    pub fn add_one(&mut self, card: &Card) -> Result<(), EngineError> {
        let i = self.pile_index(card)?;
        let pile = &mut self.piles[i];

        if pile.is_empty() {
            self.empty_piles -= 1;
        }
        pile.add_one();

        debug!(pile = %card.name, count = pile.count(), "card returned to supply");
        Ok(())
    }

    /// Whether the supply is depleted enough to end the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.threshold_reached() || self.exhausted_ending_pile().is_some()
    }

    /// Whether the number of empty piles has reached the threshold.
    #[must_use]
    pub fn threshold_reached(&self) -> bool {
        self.empty_piles >= self.game_over_threshold
    }

    /// The first empty pile whose card ends the game, if any.
    #[must_use]
    pub fn exhausted_ending_pile(&self) -> Option<&Pile> {
        self.piles.iter().find(|p| p.ends_game() && p.is_empty())
    }

    // === Queries ===

    #[must_use]
    pub fn pile(&self, name: &str) -> Option<&Pile> {
        self.index.get(name).map(|&i| &self.piles[i])
    }

    /// The card behind a pile, by name.
    #[must_use]
    pub fn card(&self, name: &str) -> Option<&Card> {
        self.pile(name).map(Pile::card)
    }

    /// All piles, in construction order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    #[must_use]
    pub fn empty_pile_count(&self) -> usize {
        self.empty_piles
    }

    #[must_use]
    pub fn game_over_threshold(&self) -> usize {
        self.game_over_threshold
    }
}

impl std::fmt::Display for Supply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, pile) in self.piles.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{pile}")?;
        }
        Ok(())
    }
}
