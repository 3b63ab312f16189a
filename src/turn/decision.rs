//! Decision provider seam.
//!
//! The engine never decides anything on a player's behalf. At each choice
//! point it hands a read-only view to a [`DecisionProvider`] and waits for
//! the answer. Input parsing, UIs and bots all live behind this trait.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::TurnState;
use crate::cards::Card;
use crate::core::{Player, PlayerId, TurnError};
use crate::supply::{Pile, Supply};
use crate::zones::Deck;

/// A choice during the action phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionDecision {
    /// Play the card at this hand index.
    PlayIndex(usize),
    /// Play every coin card in hand.
    PlayAllCoins,
    /// Move on to the buy phase.
    EndPhase,
}

/// A choice during the buy phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyDecision {
    /// Buy one card from the named pile.
    Buy(String),
    /// Stop buying this turn.
    Decline,
}

impl BuyDecision {
    pub fn buy(name: impl Into<String>) -> Self {
        Self::Buy(name.into())
    }
}

/// What a provider sees in the action phase.
#[derive(Clone, Copy, Debug)]
pub struct ActionView<'a> {
    pub player: &'a Player,
    pub deck: &'a Deck,
    pub turn: &'a TurnState,
}

impl<'a> ActionView<'a> {
    #[must_use]
    pub fn hand(&self) -> &'a Vector<Card> {
        self.deck.hand()
    }
}

/// What a provider sees in the buy phase.
#[derive(Clone, Copy, Debug)]
pub struct BuyView<'a> {
    pub player: &'a Player,
    pub deck: &'a Deck,
    pub turn: &'a TurnState,
    pub supply: &'a Supply,
}

impl<'a> BuyView<'a> {
    #[must_use]
    pub fn piles(&self) -> &'a [Pile] {
        self.supply.piles()
    }

    /// Non-empty piles the player can afford right now.
    pub fn affordable(&self) -> impl Iterator<Item = &'a Pile> + 'a {
        let turn = *self.turn;
        self.supply
            .piles()
            .iter()
            .filter(move |p| !p.is_empty() && turn.can_afford(p.card()))
    }
}

/// Source of player decisions.
pub trait DecisionProvider {
    /// Choose the next action-phase step.
    fn action(&mut self, view: &ActionView<'_>) -> ActionDecision;

    /// Choose the next purchase, or decline.
    fn buy(&mut self, view: &BuyView<'_>) -> BuyDecision;

    /// A decision was refused. The phase asks again afterwards.
    fn rejected(&mut self, _player: PlayerId, _error: &TurnError) {}
}

impl<P: DecisionProvider + ?Sized> DecisionProvider for Box<P> {
    fn action(&mut self, view: &ActionView<'_>) -> ActionDecision {
        (**self).action(view)
    }

    fn buy(&mut self, view: &BuyView<'_>) -> BuyDecision {
        (**self).buy(view)
    }

    fn rejected(&mut self, player: PlayerId, error: &TurnError) {
        (**self).rejected(player, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::base::{copper, gold, province, silver};
    use crate::core::GameRng;
    use crate::supply::Pile;

    #[test]
    fn test_affordable_skips_empty_and_expensive() {
        let supply = Supply::new(
            vec![
                Pile::new(copper(), 0),
                Pile::new(silver(), 5),
                Pile::new(gold(), 5),
                Pile::new(province(), 5),
            ],
            3,
        );
        let player = Player::new(PlayerId::new(0), "pink");
        let deck = Deck::from_zones(Vec::new(), Vec::new(), Vec::new(), Vec::new(), 5, GameRng::new(1));
        let mut turn = TurnState::new();
        turn.add_money(6);

        let view = BuyView { player: &player, deck: &deck, turn: &turn, supply: &supply };
        let names: Vec<_> = view.affordable().map(|p| p.card().name.as_str()).collect();

        assert_eq!(names, vec!["silver", "gold"]);
        assert_eq!(view.piles().len(), 4);
    }

    #[test]
    fn test_buy_decision_builder() {
        assert_eq!(BuyDecision::buy("gold"), BuyDecision::Buy("gold".to_string()));
    }
}
