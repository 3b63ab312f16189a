//! The base card set.
//!
//! Pile sizes follow the classic two-player setup: 30 of each treasure,
//! 10 of each victory card, 10 of each kingdom card.

use crate::effects::Effect;

use super::definition::Card;
use super::registry::CardCatalog;

pub const TREASURE_PILE: u32 = 30;
pub const VICTORY_PILE: u32 = 10;
pub const KINGDOM_PILE: u32 = 10;

pub fn copper() -> Card {
    Card::coin("copper", 0, 1)
}

pub fn silver() -> Card {
    Card::coin("silver", 3, 2)
}

pub fn gold() -> Card {
    Card::coin("gold", 6, 3)
}

pub fn estate() -> Card {
    Card::victory("estate", 2, 1)
}

pub fn duchy() -> Card {
    Card::victory("duchy", 5, 3)
}

pub fn province() -> Card {
    Card::victory("province", 8, 6).ending_game()
}

pub fn curse() -> Card {
    Card::victory("curse", 0, -1)
}

/// +1 card, +2 actions.
pub fn village() -> Card {
    Card::action("village", 3, Effect::batch([Effect::draw(1), Effect::actions(2)]))
}

/// +3 cards.
pub fn smithy() -> Card {
    Card::action("smithy", 4, Effect::draw(3))
}

/// +1 buy, +2 money.
pub fn woodcutter() -> Card {
    Card::action("woodcutter", 3, Effect::batch([Effect::buys(1), Effect::money(2)]))
}

/// +2 actions, +1 buy, +2 money.
pub fn festival() -> Card {
    Card::action(
        "festival",
        5,
        Effect::batch([Effect::actions(2), Effect::buys(1), Effect::money(2)]),
    )
}

/// +2 cards, +1 action.
pub fn laboratory() -> Card {
    Card::action("laboratory", 5, Effect::batch([Effect::draw(2), Effect::actions(1)]))
}

/// +1 card, +1 action, +1 buy, +1 money.
pub fn market() -> Card {
    Card::action(
        "market",
        5,
        Effect::batch([
            Effect::draw(1),
            Effect::actions(1),
            Effect::buys(1),
            Effect::money(1),
        ]),
    )
}

/// Every base card with its pile size, in supply display order.
#[must_use]
pub fn base_catalog() -> CardCatalog {
    CardCatalog::new()
        .with(copper(), TREASURE_PILE)
        .with(silver(), TREASURE_PILE)
        .with(gold(), TREASURE_PILE)
        .with(estate(), VICTORY_PILE)
        .with(duchy(), VICTORY_PILE)
        .with(province(), VICTORY_PILE)
        .with(curse(), VICTORY_PILE)
        .with(village(), KINGDOM_PILE)
        .with(smithy(), KINGDOM_PILE)
        .with(woodcutter(), KINGDOM_PILE)
        .with(festival(), KINGDOM_PILE)
        .with(laboratory(), KINGDOM_PILE)
        .with(market(), KINGDOM_PILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_base_catalog_contents() {
        let catalog = base_catalog();

        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.pile_size("copper"), Some(TREASURE_PILE));
        assert_eq!(catalog.pile_size("province"), Some(VICTORY_PILE));
        assert_eq!(catalog.pile_size("smithy"), Some(KINGDOM_PILE));
    }

    #[test]
    fn test_only_province_ends_game() {
        let enders: Vec<_> = base_catalog()
            .iter()
            .filter(|e| e.card.ends_game)
            .map(|e| e.card.name.clone())
            .collect();
        assert_eq!(enders, vec!["province"]);
    }

    #[test]
    fn test_action_cards_have_effects() {
        for entry in base_catalog().iter() {
            assert_eq!(
                entry.card.kind == CardKind::Action,
                entry.card.effect.is_some(),
                "{}",
                entry.card.name
            );
        }
    }
}
