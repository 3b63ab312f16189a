//! Built-in decision providers for simulation and tests.
//!
//! - `Scripted`: replays a fixed list of decisions
//! - `BigMoney`: the classic money-only strategy, optionally with one
//!   kingdom card
//! - `RandomAgent`: uniform choice over the plausible options

use std::collections::VecDeque;

use crate::cards::CardKind;
use crate::core::{GameRng, PlayerId, TurnError};
use crate::turn::{ActionDecision, ActionView, BuyDecision, BuyView, DecisionProvider};

// =============================================================================
// Scripted
// =============================================================================

/// Replays queued decisions in order.
///
/// Once a queue is empty the agent ends the phase (`EndPhase` / `Decline`).
/// Rejections are recorded rather than retried, so a refused decision
/// simply consumes its slot.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    actions: VecDeque<ActionDecision>,
    buys: VecDeque<BuyDecision>,
    rejections: Vec<(PlayerId, TurnError)>,
}

impl Scripted {
    #[must_use]
    pub fn new(
        actions: impl IntoIterator<Item = ActionDecision>,
        buys: impl IntoIterator<Item = BuyDecision>,
    ) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            buys: buys.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    /// Queue more action-phase decisions.
    pub fn push_action(&mut self, decision: ActionDecision) {
        self.actions.push_back(decision);
    }

    /// Queue more buy-phase decisions.
    pub fn push_buy(&mut self, decision: BuyDecision) {
        self.buys.push_back(decision);
    }

    /// Every rejection reported so far.
    #[must_use]
    pub fn rejections(&self) -> &[(PlayerId, TurnError)] {
        &self.rejections
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.actions.is_empty() && self.buys.is_empty()
    }
}

impl DecisionProvider for Scripted {
    fn action(&mut self, _view: &ActionView<'_>) -> ActionDecision {
        self.actions.pop_front().unwrap_or(ActionDecision::EndPhase)
    }

    fn buy(&mut self, _view: &BuyView<'_>) -> BuyDecision {
        self.buys.pop_front().unwrap_or(BuyDecision::Decline)
    }

    fn rejected(&mut self, player: PlayerId, error: &TurnError) {
        self.rejections.push((player, error.clone()));
    }
}

// =============================================================================
// Big Money
// =============================================================================

/// Buy the best money or victory card the coins allow.
///
/// Province at 8, gold at 6, silver at 3. With a kingdom card configured,
/// buys it at its cost (up to `max_copies` owned) ahead of silver, and plays
/// any action card in hand before the coins.
#[derive(Clone, Debug, Default)]
pub struct BigMoney {
    kingdom: Option<(String, usize)>,
}

impl BigMoney {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also buy up to `max_copies` of the named kingdom card.
    #[must_use]
    pub fn with_action(name: impl Into<String>, max_copies: usize) -> Self {
        Self {
            kingdom: Some((name.into(), max_copies)),
        }
    }

    fn wants_kingdom(&self, view: &BuyView<'_>) -> Option<String> {
        let (name, max_copies) = self.kingdom.as_ref()?;
        let pile = view.affordable().find(|p| p.is_named(name))?;

        if view.deck.count_named(name) < *max_copies && view.turn.money() < 6 {
            Some(pile.card().name.clone())
        } else {
            None
        }
    }
}

impl DecisionProvider for BigMoney {
    fn action(&mut self, view: &ActionView<'_>) -> ActionDecision {
        let hand = view.hand();

        if view.turn.actions() > 0 {
            if let Some(index) = hand.iter().position(|c| c.kind == CardKind::Action) {
                return ActionDecision::PlayIndex(index);
            }
        }

        if hand.iter().any(|c| c.is_coin()) {
            ActionDecision::PlayAllCoins
        } else {
            ActionDecision::EndPhase
        }
    }

    fn buy(&mut self, view: &BuyView<'_>) -> BuyDecision {
        let money = view.turn.money();
        let can_buy = |name: &str| view.affordable().any(|p| p.is_named(name));

        if money >= 8 && can_buy("province") {
            return BuyDecision::buy("province");
        }
        if money >= 6 && can_buy("gold") {
            return BuyDecision::buy("gold");
        }
        if let Some(name) = self.wants_kingdom(view) {
            return BuyDecision::Buy(name);
        }
        if money >= 3 && can_buy("silver") {
            return BuyDecision::buy("silver");
        }
        BuyDecision::Decline
    }
}

// =============================================================================
// Random
// =============================================================================

/// Picks uniformly among the moves that could succeed.
///
/// In the action phase: any coin, any action card while actions remain, or
/// ending the phase. In the buy phase: any affordable pile, or declining.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl DecisionProvider for RandomAgent {
    fn action(&mut self, view: &ActionView<'_>) -> ActionDecision {
        let actions_left = view.turn.actions() > 0;
        let mut options: Vec<ActionDecision> = view
            .hand()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_coin() || (actions_left && c.is_action()))
            .map(|(i, _)| ActionDecision::PlayIndex(i))
            .collect();
        options.push(ActionDecision::EndPhase);

        let idx = self.rng.gen_range_usize(0..options.len());
        options.swap_remove(idx)
    }

    fn buy(&mut self, view: &BuyView<'_>) -> BuyDecision {
        let mut options: Vec<BuyDecision> = view
            .affordable()
            .map(|p| BuyDecision::Buy(p.card().name.clone()))
            .collect();
        options.push(BuyDecision::Decline);

        self.rng.choose(&options).cloned().unwrap_or(BuyDecision::Decline)
    }
}
