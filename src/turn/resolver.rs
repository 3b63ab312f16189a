//! One player's turn: the action, buy and cleanup phases.
//!
//! A `TurnResolver` owns a seat's `Deck` and `TurnState`. It is the only
//! thing that mutates them, and it only touches the shared `Supply` when
//! a purchase goes through.
//!
//! ## Phases
//!
//! ```text
//! Idle --start_turn--> Action --end_action_phase--> Buy --end_buy_phase--> Cleanup
//!   ^                                                                          |
//!   +------------------------------------cleanup-------------------------------+
//! ```
//!
//! Transitions only move forward; `cleanup` may be called from any started
//! phase.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::decision::{ActionView, BuyView};
use super::TurnState;
use crate::cards::Card;
use crate::core::{EngineError, Player, Rejection, TurnError};
use crate::effects::{EffectContext, EffectResolver};
use crate::supply::Supply;
use crate::zones::{Deck, Zone};

/// Where a seat is within its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Not this seat's turn.
    Idle,
    Action,
    Buy,
    Cleanup,
}

/// A completed purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub card: Card,
    /// The supply reported game over after this purchase.
    pub game_over: bool,
}

/// Capability handle given to card effects.
///
/// Scoped to the acting seat's own deck and counters.
pub struct TurnHandle<'a> {
    deck: &'a mut Deck,
    turn: &'a mut TurnState,
}

impl EffectContext for TurnHandle<'_> {
    fn draw_cards(&mut self, count: usize) -> usize {
        self.deck.draw_cards(count)
    }

    fn add_actions(&mut self, count: u32) {
        self.turn.add_actions(count);
    }

    fn add_buys(&mut self, count: u32) {
        self.turn.add_buys(count);
    }

    fn add_money(&mut self, amount: u32) {
        self.turn.add_money(amount);
    }

    fn reshuffle_discard(&mut self) {
        self.deck.force_shuffle();
    }
}

/// A seat: player identity, deck, and turn counters.
#[derive(Clone, Debug)]
pub struct TurnResolver {
    player: Player,
    deck: Deck,
    turn: TurnState,
    phase: TurnPhase,
}

impl TurnResolver {
    #[must_use]
    pub fn new(player: Player, deck: Deck) -> Self {
        Self {
            player,
            deck,
            turn: TurnState::new(),
            phase: TurnPhase::Idle,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Victory points over every card this seat owns.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.deck.points()
    }

    #[must_use]
    pub fn action_view(&self) -> ActionView<'_> {
        ActionView {
            player: &self.player,
            deck: &self.deck,
            turn: &self.turn,
        }
    }

    #[must_use]
    pub fn buy_view<'a>(&'a self, supply: &'a Supply) -> BuyView<'a> {
        BuyView {
            player: &self.player,
            deck: &self.deck,
            turn: &self.turn,
            supply,
        }
    }

    fn require(&self, expected: TurnPhase) -> Result<(), Rejection> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(Rejection::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    // === Phase transitions ===

    /// Begin a turn: fresh counters, action phase.
    ///
    /// Returns false (and does nothing) if a turn is already in progress.
    pub fn start_turn(&mut self) -> bool {
        if self.phase != TurnPhase::Idle {
            return false;
        }
        self.turn.reset();
        self.phase = TurnPhase::Action;
        true
    }

    /// Action → Buy. Returns false if not in the action phase.
    pub fn end_action_phase(&mut self) -> bool {
        if self.phase != TurnPhase::Action {
            return false;
        }
        self.phase = TurnPhase::Buy;
        true
    }

    /// Buy → Cleanup. Returns false if not in the buy phase.
    pub fn end_buy_phase(&mut self) -> bool {
        if self.phase != TurnPhase::Buy {
            return false;
        }
        self.phase = TurnPhase::Cleanup;
        true
    }

    /// Reset the counters, discard hand and in-play, draw a new hand.
    ///
    /// Returns false (and does nothing) if no turn is in progress.
    pub fn cleanup(&mut self) -> bool {
        if self.phase == TurnPhase::Idle {
            return false;
        }
        self.turn.reset();
        self.deck.end_turn();
        self.phase = TurnPhase::Idle;
        true
    }

    // === Action phase ===

    /// Play the card at `index` in hand.
    ///
    /// The play is validated before the card leaves the hand, so a rejected
    /// play changes nothing. Action cards resolve their effect immediately.
    pub fn play_card(&mut self, index: usize) -> Result<Card, TurnError> {
        self.require(TurnPhase::Action)?;

        let len = self.deck.hand().len();
        let card = self
            .deck
            .hand()
            .get(index)
            .ok_or(EngineError::IndexOutOfRange { index, len })?;
        self.turn.can_play(card)?;

        let card = self.deck.play_card(index)?;
        self.turn.apply_played_card(&card)?;
        debug!(player = %self.player, card = %card, "played card");

        if let Some(effect) = &card.effect {
            let mut handle = TurnHandle {
                deck: &mut self.deck,
                turn: &mut self.turn,
            };
            let summary = EffectResolver::resolve(effect, &mut handle);
            debug!(player = %self.player, card = %card, ?summary, "resolved effect");
        }

        Ok(card)
    }

    /// Play every coin card in hand, left to right.
    ///
    /// Returns the number of cards played.
    pub fn play_all_coins(&mut self) -> Result<usize, TurnError> {
        self.require(TurnPhase::Action)?;

        let mut played = 0;
        let mut index = 0;
        while let Some(card) = self.deck.hand().get(index) {
            if card.is_coin() {
                self.play_card(index)?;
                played += 1;
            } else {
                index += 1;
            }
        }

        Ok(played)
    }

    // === Buy phase ===

    /// Buy one card from the named supply pile into the discard pile.
    ///
    /// Every check happens before anything changes: a rejected purchase
    /// spends no buy and leaves the supply alone.
    pub fn buy(&mut self, supply: &mut Supply, name: &str) -> Result<Purchase, TurnError> {
        self.require(TurnPhase::Buy)?;

        if self.turn.buys() == 0 {
            return Err(Rejection::NoBuysRemaining.into());
        }

        let pile = supply.pile(name).ok_or_else(|| Rejection::UnknownCard {
            name: name.to_string(),
        })?;
        if pile.is_empty() {
            return Err(Rejection::PileEmpty {
                name: name.to_string(),
            }
            .into());
        }

        let card = pile.card().clone();
        if !self.turn.can_afford(&card) {
            return Err(Rejection::CannotAfford {
                name: card.name,
                cost: card.cost,
                money: self.turn.money(),
            }
            .into());
        }

        let game_over = supply.remove_one(&card)?;
        self.turn.apply_purchased_card(&card);
        self.deck.gain(card.clone(), Zone::Discard);
        debug!(player = %self.player, card = %card, money_left = self.turn.money(), "bought card");

        Ok(Purchase { card, game_over })
    }
}
