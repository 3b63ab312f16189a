//! Card catalog: the fixed set of cards a game is built from.
//!
//! The `CardCatalog` maps card names to descriptors and supply pile sizes.
//! Iteration follows registration order, which is also the order of the
//! supply piles.

use rustc_hash::FxHashMap;

use super::definition::Card;

/// A catalog card together with its supply pile size.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub card: Card,
    pub pile_size: u32,
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::cards::{Card, CardCatalog};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::coin("copper", 0, 1), 30);
///
/// let found = catalog.get("copper").unwrap();
/// assert_eq!(found.value, 1);
/// assert_eq!(catalog.pile_size("copper"), Some(30));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    entries: Vec<CatalogEntry>,
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card with its pile size.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: Card, pile_size: u32) {
        if self.by_name.contains_key(&card.name) {
            panic!("Card {:?} already registered", card.name);
        }
        self.by_name.insert(card.name.clone(), self.entries.len());
        self.entries.push(CatalogEntry { card, pile_size });
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, card: Card, pile_size: u32) -> Self {
        self.register(card, pile_size);
        self
    }

    /// Get a card by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.entry(name).map(|e| &e.card)
    }

    /// Get a card and its pile size by name.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Supply pile size for a card.
    #[must_use]
    pub fn pile_size(&self, name: &str) -> Option<u32> {
        self.entry(name).map(|e| e.pile_size)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Fresh copies of a card, e.g. for a starting deck.
    ///
    /// Returns `None` if the card is not registered.
    #[must_use]
    pub fn copies(&self, name: &str, count: u32) -> Option<Vec<Card>> {
        let card = self.get(name)?;
        Some((0..count).map(|_| card.clone()).collect())
    }
}
