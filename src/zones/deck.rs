//! A player's deck: four zones and the transitions between them.
//!
//! Every card a player owns is in exactly one of `hand`, `draw`, `discard`
//! or `in_play`. Only [`Deck::gain`] changes how many cards the deck holds;
//! every other operation moves cards between zones.
//!
//! The front of `draw` and `discard` is the top of the pile.

use std::collections::BTreeMap;

use im::Vector;
use tracing::debug;

use super::Zone;
use crate::cards::Card;
use crate::core::{EngineError, GameRng};

/// One player's cards.
///
/// Zones are `im` vectors, so cloning a deck (and with it a whole engine)
/// is O(1).
#[derive(Clone, Debug)]
pub struct Deck {
    hand: Vector<Card>,
    draw: Vector<Card>,
    discard: Vector<Card>,
    in_play: Vector<Card>,
    hand_size: usize,
    rng: GameRng,
}

impl Deck {
    /// Shuffle `starting_cards` into the draw pile and draw an opening hand.
    #[must_use]
    pub fn new(starting_cards: Vec<Card>, hand_size: usize, rng: GameRng) -> Self {
        let mut deck = Self::from_zones(Vec::new(), Vec::new(), starting_cards, Vec::new(), hand_size, rng);
        deck.draw_cards(hand_size);
        deck
    }

    /// Build a deck with every zone given explicitly, in top-first order.
    ///
    /// No shuffling or drawing happens.
    #[must_use]
    pub fn from_zones(
        hand: Vec<Card>,
        draw: Vec<Card>,
        discard: Vec<Card>,
        in_play: Vec<Card>,
        hand_size: usize,
        rng: GameRng,
    ) -> Self {
        Self {
            hand: hand.into(),
            draw: draw.into(),
            discard: discard.into(),
            in_play: in_play.into(),
            hand_size,
            rng,
        }
    }

    // === Transitions ===

    /// Move up to `count` cards from the top of the draw pile into hand.
    ///
    /// When the draw pile runs out, the discard pile is shuffled into it and
    /// drawing continues. If both run out the hand is simply short.
    /// Returns the number of cards drawn.
    pub fn draw_cards(&mut self, count: usize) -> usize {
        let mut drawn = 0;

        while drawn < count {
            if self.draw.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.force_shuffle();
            }

            match self.draw.pop_front() {
                Some(card) => {
                    self.hand.push_back(card);
                    drawn += 1;
                }
                None => break,
            }
        }

        drawn
    }

    /// Move the discard pile into the draw pile and shuffle.
    ///
    /// Without `force` the draw pile must be empty, otherwise the remaining
    /// draw cards would be silently reordered. With `force` (for effects that
    /// reshuffle mid-turn) the remaining draw cards are shuffled in too.
    pub fn shuffle(&mut self, force: bool) -> Result<(), EngineError> {
        if !force && !self.draw.is_empty() {
            return Err(EngineError::DrawPileNotEmpty {
                remaining: self.draw.len(),
            });
        }
        self.force_shuffle();
        Ok(())
    }

    /// Shuffle the discard pile together with whatever is left in the draw
    /// pile. Used by effects that reshuffle mid-turn.
    pub fn force_shuffle(&mut self) {
        let discard = std::mem::take(&mut self.discard);
        self.draw.append(discard);

        let mut cards: Vec<Card> = std::mem::take(&mut self.draw).into_iter().collect();
        self.rng.shuffle(&mut cards);
        self.draw = cards.into_iter().collect();

        debug!(cards = self.draw.len(), "shuffled discard into draw pile");
    }

    /// Move the card at `index` from hand to the end of in-play.
    pub fn play_card(&mut self, index: usize) -> Result<Card, EngineError> {
        if index >= self.hand.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.hand.len(),
            });
        }

        let card = self.hand.remove(index);
        self.in_play.push_back(card.clone());
        Ok(card)
    }

    /// Add a new card to the deck.
    ///
    /// Draw and discard receive it on top; hand and in-play at the end.
    pub fn gain(&mut self, card: Card, destination: Zone) {
        match destination {
            Zone::Draw => self.draw.push_front(card),
            Zone::Discard => self.discard.push_front(card),
            Zone::Hand => self.hand.push_back(card),
            Zone::InPlay => self.in_play.push_back(card),
        }
    }

    /// Clean up: in-play then hand go to the discard pile, then a new hand
    /// of `hand_size` is drawn.
    pub fn end_turn(&mut self) {
        let total = self.total_cards();

        let in_play = std::mem::take(&mut self.in_play);
        let hand = std::mem::take(&mut self.hand);
        self.discard.append(in_play);
        self.discard.append(hand);

        self.draw_cards(self.hand_size);

        debug_assert_eq!(total, self.total_cards(), "end_turn lost or duplicated cards");
    }

    // === Queries ===

    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw
    }

    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    #[must_use]
    pub fn in_play(&self) -> &Vector<Card> {
        &self.in_play
    }

    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<Card> {
        match zone {
            Zone::Hand => &self.hand,
            Zone::Draw => &self.draw,
            Zone::Discard => &self.discard,
            Zone::InPlay => &self.in_play,
        }
    }

    /// Cards drawn at the end of each turn.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Every owned card: hand, draw, discard, then in-play.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        Zone::ALL.into_iter().flat_map(move |z| self.zone(z).iter())
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand.len() + self.draw.len() + self.discard.len() + self.in_play.len()
    }

    /// Copies of `card` across all zones.
    #[must_use]
    pub fn count_of(&self, card: &Card) -> usize {
        self.count_named(&card.name)
    }

    #[must_use]
    pub fn count_named(&self, name: &str) -> usize {
        self.cards().filter(|c| c.name == name).count()
    }

    /// The full card multiset, keyed by name.
    #[must_use]
    pub fn card_counts(&self) -> BTreeMap<String, u32> {
        let mut counts = BTreeMap::new();
        for card in self.cards() {
            *counts.entry(card.name.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Sum of victory points over every owned card.
    #[must_use]
    pub fn points(&self) -> i64 {
        self.cards().map(|c| i64::from(c.points)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::base::{copper, estate, smithy};

    fn numbered(n: usize) -> Vec<Card> {
        (0..n).map(|i| Card::coin(format!("c{i}"), 0, 1)).collect()
    }

    fn deck_with(hand: Vec<Card>, draw: Vec<Card>, discard: Vec<Card>) -> Deck {
        Deck::from_zones(hand, draw, discard, Vec::new(), 5, GameRng::new(42))
    }

    fn names(cards: &Vector<Card>) -> Vec<String> {
        cards.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_new_draws_opening_hand() {
        let mut starting = vec![estate(); 3];
        starting.extend(vec![copper(); 7]);

        let deck = Deck::new(starting, 5, GameRng::new(1));

        assert_eq!(deck.hand().len(), 5);
        assert_eq!(deck.draw_pile().len(), 5);
        assert!(deck.discard().is_empty());
        assert_eq!(deck.total_cards(), 10);
        assert_eq!(deck.count_of(&copper()), 7);
        assert_eq!(deck.count_of(&estate()), 3);
        assert_eq!(deck.count_of(&smithy()), 0);
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut deck = deck_with(Vec::new(), numbered(3), Vec::new());

        assert_eq!(deck.draw_cards(2), 2);
        assert_eq!(names(deck.hand()), vec!["c0", "c1"]);
        assert_eq!(names(deck.draw_pile()), vec!["c2"]);
    }

    #[test]
    fn test_draw_reshuffles_discard_when_empty() {
        let cards = numbered(10);
        let mut deck = deck_with(Vec::new(), Vec::new(), cards.clone());

        assert_eq!(deck.draw_cards(5), 5);

        assert_eq!(deck.hand().len(), 5);
        assert!(deck.discard().is_empty());
        assert_eq!(deck.draw_pile().len(), 5);

        let mut all: Vec<_> = deck.cards().map(|c| c.name.clone()).collect();
        all.sort();
        let mut expected: Vec<_> = cards.iter().map(|c| c.name.clone()).collect();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_draw_uses_remaining_draw_before_reshuffle() {
        let mut deck = deck_with(Vec::new(), numbered(2), vec![estate(), estate()]);

        assert_eq!(deck.draw_cards(3), 3);

        let hand = names(deck.hand());
        assert_eq!(&hand[..2], &["c0", "c1"]);
        assert_eq!(hand[2], "estate");
        assert_eq!(deck.draw_pile().len(), 1);
    }

    #[test]
    fn test_short_draw_is_not_an_error() {
        let mut deck = deck_with(Vec::new(), numbered(1), numbered(2));

        assert_eq!(deck.draw_cards(5), 3);
        assert_eq!(deck.hand().len(), 3);
        assert!(deck.draw_pile().is_empty());
        assert!(deck.discard().is_empty());
    }

    #[test]
    fn test_shuffle_requires_empty_draw() {
        let mut deck = deck_with(Vec::new(), numbered(2), numbered(3));

        assert_eq!(
            deck.shuffle(false),
            Err(EngineError::DrawPileNotEmpty { remaining: 2 })
        );
        assert_eq!(deck.draw_pile().len(), 2);
        assert_eq!(deck.discard().len(), 3);
    }

    #[test]
    fn test_forced_shuffle_keeps_every_card() {
        let mut deck = deck_with(Vec::new(), numbered(2), vec![estate(); 3]);

        deck.shuffle(true).unwrap();

        assert_eq!(deck.draw_pile().len(), 5);
        assert!(deck.discard().is_empty());
        assert_eq!(deck.count_named("estate"), 3);
    }

    #[test]
    fn test_play_card() {
        let mut deck = deck_with(vec![copper(), estate(), smithy()], Vec::new(), Vec::new());

        let played = deck.play_card(2).unwrap();

        assert_eq!(played, smithy());
        assert_eq!(names(deck.hand()), vec!["copper", "estate"]);
        assert_eq!(names(deck.in_play()), vec!["smithy"]);
    }

    #[test]
    fn test_play_card_out_of_range() {
        let mut deck = deck_with(vec![copper()], Vec::new(), Vec::new());

        assert_eq!(
            deck.play_card(1),
            Err(EngineError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(deck.hand().len(), 1);
        assert!(deck.in_play().is_empty());
    }

    #[test]
    fn test_gain_positions() {
        let mut deck = deck_with(vec![copper()], numbered(1), numbered(1));

        deck.gain(estate(), Zone::Draw);
        deck.gain(estate(), Zone::Discard);
        deck.gain(smithy(), Zone::Hand);
        deck.gain(smithy(), Zone::InPlay);

        assert_eq!(names(deck.draw_pile()), vec!["estate", "c0"]);
        assert_eq!(names(deck.discard()), vec!["estate", "c0"]);
        assert_eq!(names(deck.hand()), vec!["copper", "smithy"]);
        assert_eq!(names(deck.in_play()), vec!["smithy"]);
        assert_eq!(deck.total_cards(), 7);
    }

    #[test]
    fn test_end_turn() {
        let mut deck = deck_with(vec![estate(), copper()], numbered(6), Vec::new());
        deck.play_card(1).unwrap();

        deck.end_turn();

        assert!(deck.in_play().is_empty());
        assert_eq!(deck.hand().len(), 5);
        assert_eq!(names(deck.discard()), vec!["copper", "estate"]);
        assert_eq!(deck.total_cards(), 8);
    }

    #[test]
    fn test_end_turn_with_few_cards_left() {
        let mut deck = deck_with(vec![copper()], Vec::new(), vec![estate()]);

        deck.end_turn();

        assert_eq!(deck.hand().len(), 2);
        assert!(deck.discard().is_empty());
        assert!(deck.draw_pile().is_empty());
    }

    #[test]
    fn test_card_counts_and_points() {
        let deck = deck_with(
            vec![estate(), copper()],
            vec![Card::victory("curse", 0, -1)],
            vec![estate()],
        );

        let counts = deck.card_counts();
        assert_eq!(counts.get("estate"), Some(&2));
        assert_eq!(counts.get("copper"), Some(&1));
        assert_eq!(counts.get("curse"), Some(&1));
        assert_eq!(deck.points(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut deck = deck_with(Vec::new(), numbered(5), Vec::new());
        let snapshot = deck.clone();

        deck.draw_cards(5);

        assert!(snapshot.hand().is_empty());
        assert_eq!(snapshot.draw_pile().len(), 5);
    }
}
