//! Card descriptors.
//!
//! A `Card` is an immutable value object. Two cards are the same card when
//! they have the same name; every other field is descriptive data.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// What a card does when played, and how it scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Treasure: adds `value` money when played.
    Coin,
    /// Victory card: worth `points`, cannot be played.
    Point,
    /// Spends an action and resolves an effect.
    Action,
    /// Alchemy treasure. No potion costs exist in the catalog, so potions
    /// are bought and scored like any card but are never played.
    Potion,
}

impl CardKind {
    /// Whether cards of this kind may be played in the action phase.
    #[must_use]
    pub fn is_playable(self) -> bool {
        matches!(self, CardKind::Coin | CardKind::Action)
    }
}

/// Immutable card descriptor.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::cards::{Card, CardKind};
/// use rust_deckbuilder::effects::Effect;
///
/// let silver = Card::coin("silver", 3, 2);
/// let smithy = Card::action("smithy", 4, Effect::draw(3));
/// let province = Card::victory("province", 8, 6).ending_game();
///
/// assert_eq!(silver.kind, CardKind::Coin);
/// assert!(smithy.effect.is_some());
/// assert!(province.ends_game);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Identity key.
    pub name: String,
    pub cost: u32,
    pub kind: CardKind,
    /// Money produced when played (Coin only).
    pub value: u32,
    /// Victory points; negative for curses.
    pub points: i32,
    /// Resolved when played (Action only).
    pub effect: Option<Effect>,
    /// The game ends as soon as this card's pile is empty.
    pub ends_game: bool,
}

impl Card {
    /// Create a card with every field given explicitly.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        kind: CardKind,
        value: u32,
        points: i32,
        effect: Option<Effect>,
    ) -> Self {
        debug_assert!(
            effect.is_none() || kind == CardKind::Action,
            "only action cards carry effects"
        );
        Self {
            name: name.into(),
            cost,
            kind,
            value,
            points,
            effect,
            ends_game: false,
        }
    }

    /// A treasure worth `value` money.
    #[must_use]
    pub fn coin(name: impl Into<String>, cost: u32, value: u32) -> Self {
        Self::new(name, cost, CardKind::Coin, value, 0, None)
    }

    /// A victory (or curse) card worth `points`.
    #[must_use]
    pub fn victory(name: impl Into<String>, cost: u32, points: i32) -> Self {
        Self::new(name, cost, CardKind::Point, 0, points, None)
    }

    /// An action card resolving `effect` when played.
    #[must_use]
    pub fn action(name: impl Into<String>, cost: u32, effect: Effect) -> Self {
        Self::new(name, cost, CardKind::Action, 0, 0, Some(effect))
    }

    /// Mark this card's pile as ending the game when emptied.
    #[must_use]
    pub fn ending_game(mut self) -> Self {
        self.ends_game = true;
        self
    }

    #[must_use]
    pub fn is_coin(&self) -> bool {
        self.kind == CardKind::Coin
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.kind == CardKind::Action
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_name() {
        let a = Card::coin("copper", 0, 1);
        let mut b = a.clone();
        b.cost = 99;
        assert_eq!(a, b);
        assert_ne!(a, Card::coin("silver", 3, 2));
    }

    #[test]
    fn test_constructors() {
        let estate = Card::victory("estate", 2, 1);
        assert_eq!(estate.kind, CardKind::Point);
        assert_eq!(estate.points, 1);
        assert!(!estate.ends_game);

        let curse = Card::victory("curse", 0, -1);
        assert_eq!(curse.points, -1);

        let village = Card::action("village", 3, Effect::draw(1));
        assert!(village.is_action());
        assert!(!village.is_coin());
    }

    #[test]
    fn test_playable_kinds() {
        assert!(CardKind::Coin.is_playable());
        assert!(CardKind::Action.is_playable());
        assert!(!CardKind::Point.is_playable());
        assert!(!CardKind::Potion.is_playable());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::victory("duchy", 5, 3).to_string(), "duchy");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::action("smithy", 4, Effect::draw(3));
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(back, card);
        assert_eq!(back.effect, Some(Effect::draw(3)));
    }
}
