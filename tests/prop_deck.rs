//! Property-based tests for deck and supply bookkeeping.

use proptest::prelude::*;

use rust_deckbuilder::cards::base::{copper, duchy, estate, gold, silver};
use rust_deckbuilder::cards::Card;
use rust_deckbuilder::core::GameRng;
use rust_deckbuilder::supply::{Pile, Supply};
use rust_deckbuilder::zones::{Deck, Zone};

#[derive(Clone, Debug)]
enum DeckOp {
    Draw(usize),
    Play(usize),
    Shuffle(bool),
    Gain(Zone),
    EndTurn,
}

fn deck_op() -> impl Strategy<Value = DeckOp> {
    prop_oneof![
        (0usize..8).prop_map(DeckOp::Draw),
        (0usize..10).prop_map(DeckOp::Play),
        any::<bool>().prop_map(DeckOp::Shuffle),
        prop::sample::select(Zone::ALL.to_vec()).prop_map(DeckOp::Gain),
        Just(DeckOp::EndTurn),
    ]
}

fn starting_cards(coppers: usize, estates: usize) -> Vec<Card> {
    std::iter::repeat_with(copper)
        .take(coppers)
        .chain(std::iter::repeat_with(estate).take(estates))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Only `gain` changes how many cards a deck holds.
    #[test]
    fn prop_deck_conserves_cards(
        coppers in 0usize..10,
        estates in 0usize..5,
        hand_size in 1usize..8,
        seed in any::<u64>(),
        ops in prop::collection::vec(deck_op(), 0..60),
    ) {
        let mut deck = Deck::new(starting_cards(coppers, estates), hand_size, GameRng::new(seed));
        let mut expected = coppers + estates;
        prop_assert_eq!(deck.total_cards(), expected);

        for op in ops {
            match op {
                DeckOp::Draw(n) => {
                    let available = deck.draw_pile().len() + deck.discard().len();
                    let hand_before = deck.hand().len();
                    let drawn = deck.draw_cards(n);
                    prop_assert_eq!(drawn, n.min(available));
                    prop_assert_eq!(deck.hand().len(), hand_before + drawn);
                }
                DeckOp::Play(index) => {
                    let len = deck.hand().len();
                    prop_assert_eq!(deck.play_card(index).is_ok(), index < len);
                }
                DeckOp::Shuffle(force) => {
                    let had_draw = !deck.draw_pile().is_empty();
                    prop_assert_eq!(deck.shuffle(force).is_ok(), force || !had_draw);
                }
                DeckOp::Gain(zone) => {
                    deck.gain(silver(), zone);
                    expected += 1;
                }
                DeckOp::EndTurn => {
                    let moved: Vec<Card> = deck.in_play().iter().chain(deck.hand().iter()).cloned().collect();
                    let draw_before = deck.draw_pile().len();
                    let remaining = deck.total_cards();
                    deck.end_turn();

                    prop_assert!(deck.in_play().is_empty());
                    prop_assert_eq!(deck.hand().len(), hand_size.min(remaining));

                    // No reshuffle: in-play then hand sit at the bottom of the discard
                    if draw_before >= hand_size {
                        let discard: Vec<Card> = deck.discard().iter().cloned().collect();
                        prop_assert!(discard.ends_with(&moved));
                    }
                }
            }
            prop_assert_eq!(deck.total_cards(), expected);
        }
    }

    /// The empty-pile count always matches the piles, whatever the order of
    /// removals and refills.
    #[test]
    fn prop_supply_empty_count(
        sizes in prop::collection::vec(0u32..3, 4),
        threshold in 1usize..5,
        ops in prop::collection::vec((0usize..4, any::<bool>()), 0..40),
    ) {
        let cards = [copper(), silver(), gold(), duchy()];
        let piles = cards.iter().cloned().zip(sizes).map(|(c, n)| Pile::new(c, n)).collect();
        let mut supply = Supply::new(piles, threshold);

        for (i, remove) in ops {
            let card = &cards[i];
            if remove {
                let was_empty = supply.pile(&card.name).unwrap().is_empty();
                let result = supply.remove_one(card);
                prop_assert_eq!(result.is_err(), was_empty);
            } else {
                supply.add_one(card).unwrap();
            }

            let empty = supply.piles().iter().filter(|p| p.is_empty()).count();
            prop_assert_eq!(supply.empty_pile_count(), empty);
            prop_assert_eq!(supply.is_game_over(), empty >= threshold);
        }
    }
}
