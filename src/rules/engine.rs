//! The game loop.
//!
//! `GameEngine` owns every seat and the shared supply. It asks a
//! [`DecisionProvider`] for each choice, routes the answer to the current
//! seat's [`TurnResolver`], and checks for game over between turns.
//!
//! ## Rejections
//!
//! A decision the rules refuse is reported back to the provider and the
//! phase asks again. A provider that keeps getting refused is cut off after
//! `max_rejections_per_phase` and its phase ends, so a broken bot cannot
//! stall the game.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::result::{EndReason, GameResult, Standing};
use crate::cards::{Card, CardCatalog};
use crate::core::{ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap, TurnError};
use crate::supply::Supply;
use crate::turn::{ActionDecision, BuyDecision, DecisionProvider, TurnResolver};
use crate::zones::Deck;

/// What happened during one call to [`GameEngine::play_turn`].
#[derive(Clone, Debug, Serialize)]
pub struct TurnSummary {
    pub player: PlayerId,
    /// 1-based, counted across all seats.
    pub turn: u32,
    /// Cards played, in order.
    pub played: SmallVec<[Card; 8]>,
    /// Cards bought, in order.
    pub bought: SmallVec<[Card; 2]>,
    /// Decisions refused during the turn.
    pub rejections: u32,
    /// The game was over when the turn finished.
    pub game_over: bool,
}

/// Counts refused decisions within a phase.
struct RejectionBudget {
    used: u32,
    max: u32,
}

impl RejectionBudget {
    fn new(max: u32) -> Self {
        Self { used: 0, max }
    }

    /// Report `error` to the provider. Returns false once the budget is spent.
    fn charge(
        &mut self,
        provider: &mut dyn DecisionProvider,
        player: PlayerId,
        error: &TurnError,
    ) -> bool {
        debug!(%player, %error, "decision rejected");
        provider.rejected(player, error);
        self.used += 1;

        if self.used >= self.max {
            warn!(%player, rejections = self.used, "too many rejected decisions, ending phase");
            return false;
        }
        true
    }

    /// Count a decision that changed nothing, without reporting it.
    fn stall(&mut self, player: PlayerId) -> bool {
        self.used += 1;
        if self.used >= self.max {
            warn!(%player, stalls = self.used, "decisions made no progress, ending phase");
            return false;
        }
        true
    }
}

/// A full game: seats, supply, and turn rotation.
///
/// Cloning is cheap (zones are persistent vectors), so a caller can
/// snapshot the engine and play ahead on the copy.
#[derive(Clone, Debug)]
pub struct GameEngine {
    seats: PlayerMap<TurnResolver>,
    current: PlayerId,
    supply: Supply,
    turn_number: u32,
    turn_limit: Option<u32>,
    max_rejections: u32,
}

impl GameEngine {
    /// Set up a game: supply from the catalog, a shuffled starting deck and
    /// opening hand per seat.
    ///
    /// Starting decks are fresh copies from the catalog and do not come out
    /// of the supply. Each deck shuffles with its own stream derived from
    /// `config.seed`.
    pub fn new(config: GameConfig, catalog: &CardCatalog) -> Result<Self, ConfigError> {
        config.validate(catalog)?;

        let supply = Supply::from_catalog(catalog, &config.pile_sizes, config.game_over_threshold)?;
        let starting = config.starting_cards(catalog)?;
        let rng = GameRng::new(config.seed);

        let seats = PlayerMap::new(config.player_count(), |id| {
            let player = Player::new(id, config.player_names[id.index()].clone());
            let deck_rng = rng.for_context(&format!("deck:{}", id.index()));
            TurnResolver::new(player, Deck::new(starting.clone(), config.hand_size, deck_rng))
        });

        info!(
            players = config.player_count(),
            seed = config.seed,
            piles = supply.piles().len(),
            "game created"
        );

        Ok(Self {
            seats,
            current: PlayerId::new(0),
            supply,
            turn_number: 0,
            turn_limit: config.turn_limit,
            max_rejections: config.max_rejections_per_phase,
        })
    }

    // === Queries ===

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current(&self) -> &TurnResolver {
        self.seats.get(self.current)
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &TurnResolver {
        self.seats.get(player)
    }

    #[must_use]
    pub fn seats(&self) -> &PlayerMap<TurnResolver> {
        &self.seats
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.player_count()
    }

    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    /// Turns started so far, across all seats.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    fn turn_limit_reached(&self) -> bool {
        self.turn_limit.is_some_and(|limit| self.turn_number >= limit)
    }

    /// Why the game is over, or `None` while it continues.
    ///
    /// An exhausted ending pile takes precedence over the pile count.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        if let Some(pile) = self.supply.exhausted_ending_pile() {
            Some(EndReason::EndingPileExhausted(pile.card().name.clone()))
        } else if self.supply.threshold_reached() {
            Some(EndReason::EmptyPiles)
        } else if self.turn_limit_reached() {
            Some(EndReason::TurnLimit)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.end_reason().is_some()
    }

    /// Seat-ordered scores and card counts at this moment.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.seats
            .iter()
            .map(|(id, seat)| Standing {
                player: id,
                name: seat.player().name.clone(),
                score: seat.score(),
                cards: seat.deck().card_counts(),
            })
            .collect()
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let reason = self.end_reason()?;
        Some(GameResult::new(self.standings(), reason, self.turn_number))
    }

    // === Turn loop ===

    /// Play one full turn for the current seat.
    ///
    /// Does not advance to the next seat; call [`advance`](Self::advance).
    pub fn play_turn(&mut self, provider: &mut dyn DecisionProvider) -> TurnSummary {
        self.turn_number += 1;
        let player = self.current;
        let seat = self.seats.get_mut(player);

        let mut summary = TurnSummary {
            player,
            turn: self.turn_number,
            played: SmallVec::new(),
            bought: SmallVec::new(),
            rejections: 0,
            game_over: false,
        };

        seat.start_turn();
        info!(%player, turn = self.turn_number, hand = seat.deck().hand().len(), "turn started");

        // Action phase
        let mut budget = RejectionBudget::new(self.max_rejections);
        while !seat.deck().hand().is_empty() {
            let decision = provider.action(&seat.action_view());
            let outcome = match decision {
                ActionDecision::EndPhase => break,
                ActionDecision::PlayIndex(index) => seat.play_card(index).map(|card| {
                    summary.played.push(card);
                }),
                ActionDecision::PlayAllCoins => {
                    let before = seat.deck().in_play().len();
                    let played = seat.play_all_coins();
                    summary
                        .played
                        .extend(seat.deck().in_play().iter().skip(before).cloned());

                    if played == Ok(0) && !budget.stall(player) {
                        break;
                    }
                    played.map(|_| ())
                }
            };

            if let Err(error) = outcome {
                summary.rejections += 1;
                if !budget.charge(provider, player, &error) {
                    break;
                }
            }
        }
        seat.end_action_phase();

        // Buy phase
        let mut budget = RejectionBudget::new(self.max_rejections);
        while seat.turn().buys() > 0 {
            let name = match provider.buy(&seat.buy_view(&self.supply)) {
                BuyDecision::Decline => break,
                BuyDecision::Buy(name) => name,
            };

            match seat.buy(&mut self.supply, &name) {
                Ok(purchase) => summary.bought.push(purchase.card),
                Err(error) => {
                    summary.rejections += 1;
                    if !budget.charge(provider, player, &error) {
                        break;
                    }
                }
            }
        }
        seat.end_buy_phase();

        seat.cleanup();
        summary.game_over = self.supply.is_game_over();

        info!(
            %player,
            turn = self.turn_number,
            played = summary.played.len(),
            bought = ?summary.bought.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            score = seat.score(),
            "turn finished"
        );

        summary
    }

    /// Pass the turn to the next seat.
    pub fn advance(&mut self) {
        self.current = self.current.next(self.seats.player_count());
    }

    /// Play turns until the game is over.
    ///
    /// `providers` must have one entry per seat.
    pub fn run<P: DecisionProvider>(
        &mut self,
        providers: &mut PlayerMap<P>,
    ) -> Result<GameResult, ConfigError> {
        if providers.player_count() != self.seats.player_count() {
            return Err(ConfigError::ProviderCountMismatch {
                expected: self.seats.player_count(),
                actual: providers.player_count(),
            });
        }

        loop {
            if let Some(result) = self.result() {
                if result.end_reason == EndReason::TurnLimit {
                    warn!(turns = result.turns, "game stopped at turn limit");
                }
                info!(turns = result.turns, reason = %result.end_reason, outcome = ?result.outcome, "game over");
                return Ok(result);
            }

            let player = self.current;
            self.play_turn(providers.get_mut(player));
            self.advance();
        }
    }
}
