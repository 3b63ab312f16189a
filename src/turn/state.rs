//! Per-turn resource counters.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::core::Rejection;

/// Actions, buys and money for the turn in progress.
///
/// Starts every turn at 1 action, 1 buy, 0 money.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    actions: u32,
    buys: u32,
    money: i64,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            actions: 1,
            buys: 1,
            money: 0,
        }
    }
}

impl TurnState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to 1 action, 1 buy, 0 money.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn actions(&self) -> u32 {
        self.actions
    }

    #[must_use]
    pub fn buys(&self) -> u32 {
        self.buys
    }

    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    /// Whether `card` could be played right now.
    pub fn can_play(&self, card: &Card) -> Result<(), Rejection> {
        if !card.kind.is_playable() {
            return Err(Rejection::NotPlayable {
                card: card.name.clone(),
            });
        }
        if card.is_action() && self.actions == 0 {
            return Err(Rejection::NoActionsRemaining {
                card: card.name.clone(),
            });
        }
        Ok(())
    }

    /// Account for a played card: coins add money, actions spend an action.
    ///
    /// A rejected play leaves the counters untouched.
    pub fn apply_played_card(&mut self, card: &Card) -> Result<(), Rejection> {
        self.can_play(card)?;
        match card.kind {
            CardKind::Coin => self.money += i64::from(card.value),
            CardKind::Action => self.actions -= 1,
            CardKind::Point | CardKind::Potion => {}
        }
        Ok(())
    }

    #[must_use]
    pub fn can_afford(&self, card: &Card) -> bool {
        self.money >= i64::from(card.cost)
    }

    /// Spend a buy and the card's cost.
    ///
    /// Does not check affordability: callers reject unaffordable purchases
    /// before getting here.
    pub fn apply_purchased_card(&mut self, card: &Card) {
        debug_assert!(self.buys > 0, "purchase without a buy");
        self.buys = self.buys.saturating_sub(1);
        self.money -= i64::from(card.cost);
    }

    pub fn add_actions(&mut self, count: u32) {
        self.actions += count;
    }

    pub fn add_buys(&mut self, count: u32) {
        self.buys += count;
    }

    pub fn add_money(&mut self, amount: u32) {
        self.money += i64::from(amount);
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "actions: {}, buys: {}, money: {}",
            self.actions, self.buys, self.money
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::base::{copper, estate, gold, province, smithy};

    #[test]
    fn test_new_turn() {
        let turn = TurnState::new();
        assert_eq!((turn.actions(), turn.buys(), turn.money()), (1, 1, 0));
    }

    #[test]
    fn test_reset() {
        let mut turn = TurnState::new();
        turn.add_actions(2);
        turn.add_buys(1);
        turn.add_money(4);

        turn.reset();

        assert_eq!(turn, TurnState::default());
    }

    #[test]
    fn test_coin_adds_money() {
        let mut turn = TurnState::new();
        turn.apply_played_card(&copper()).unwrap();
        turn.apply_played_card(&gold()).unwrap();

        assert_eq!(turn.money(), 4);
        assert_eq!(turn.actions(), 1);
    }

    #[test]
    fn test_action_spends_action() {
        let mut turn = TurnState::new();

        turn.apply_played_card(&smithy()).unwrap();
        assert_eq!(turn.actions(), 0);

        assert_eq!(
            turn.apply_played_card(&smithy()),
            Err(Rejection::NoActionsRemaining { card: "smithy".to_string() })
        );
        assert_eq!(turn.actions(), 0);
    }

    #[test]
    fn test_point_cards_not_playable() {
        let mut turn = TurnState::new();
        assert_eq!(
            turn.apply_played_card(&estate()),
            Err(Rejection::NotPlayable { card: "estate".to_string() })
        );
        assert_eq!(turn, TurnState::default());
    }

    #[test]
    fn test_purchase() {
        let mut turn = TurnState::new();
        turn.add_money(9);

        assert!(turn.can_afford(&province()));
        turn.apply_purchased_card(&province());

        assert_eq!(turn.buys(), 0);
        assert_eq!(turn.money(), 1);
        assert!(!turn.can_afford(&gold()));
    }

    #[test]
    fn test_display() {
        assert_eq!(TurnState::new().to_string(), "actions: 1, buys: 1, money: 0");
    }
}
