//! A counted stack of one card in the supply.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::EngineError;

/// One supply pile. The count can never go below zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    card: Card,
    count: u32,
}

impl Pile {
    #[must_use]
    pub fn new(card: Card, count: u32) -> Self {
        Self { card, count }
    }

    /// The card this pile hands out.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether emptying this pile ends the game.
    #[must_use]
    pub fn ends_game(&self) -> bool {
        self.card.ends_game
    }

    /// Whether this pile holds `name`.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.card.name == name
    }

    /// Take one card off the pile.
    pub fn remove_one(&mut self) -> Result<(), EngineError> {
        if self.count == 0 {
            return Err(EngineError::PileExhausted {
                card: self.card.name.clone(),
            });
        }
        self.count -= 1;
        Ok(())
    }

    /// Put one card back.
    pub fn add_one(&mut self) {
        self.count += 1;
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.card.name, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::base::{copper, estate, province};

    #[test]
    fn test_pile_basics() {
        let pile = Pile::new(estate(), 10);

        assert_eq!(pile.count(), 10);
        assert_eq!(pile.card(), &estate());
        assert!(pile.is_named("estate"));
        assert!(!pile.is_named("copper"));
        assert!(!pile.is_empty());
        assert!(!pile.ends_game());
        assert!(Pile::new(province(), 10).ends_game());
    }

    #[test]
    fn test_remove_last_card() {
        let mut pile = Pile::new(estate(), 1);

        pile.remove_one().unwrap();

        assert!(pile.is_empty());
    }

    #[test]
    fn test_remove_from_empty_pile() {
        let mut pile = Pile::new(copper(), 0);

        assert_eq!(
            pile.remove_one(),
            Err(EngineError::PileExhausted { card: "copper".to_string() })
        );
        assert_eq!(pile.count(), 0);
    }

    #[test]
    fn test_add_one() {
        let mut pile = Pile::new(estate(), 0);
        pile.add_one();
        assert_eq!(pile.count(), 1);
        assert_eq!(pile.to_string(), "[estate, 1]");
    }
}
