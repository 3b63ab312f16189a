//! Effect resolution.
//!
//! Effects never see the engine. The resolver applies them through an
//! [`EffectContext`], a capability handle scoped to the acting player's
//! own deck and turn counters.

use tracing::debug;

use super::Effect;

/// What an effect is allowed to do to the acting player.
pub trait EffectContext {
    /// Draw up to `count` cards into hand. Returns how many were drawn.
    fn draw_cards(&mut self, count: usize) -> usize;

    fn add_actions(&mut self, count: u32);

    fn add_buys(&mut self, count: u32);

    fn add_money(&mut self, amount: u32);

    /// Shuffle the discard pile into the draw pile mid-turn.
    fn reshuffle_discard(&mut self);
}

/// Totals of what an effect actually did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectSummary {
    pub cards_drawn: usize,
    pub actions: u32,
    pub buys: u32,
    pub money: u32,
    pub reshuffles: u32,
}

impl EffectSummary {
    fn absorb(&mut self, other: EffectSummary) {
        self.cards_drawn += other.cards_drawn;
        self.actions += other.actions;
        self.buys += other.buys;
        self.money += other.money;
        self.reshuffles += other.reshuffles;
    }
}

/// Resolves effects against a context.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve an effect (recursively for batches), in order.
    pub fn resolve(effect: &Effect, ctx: &mut dyn EffectContext) -> EffectSummary {
        let mut summary = EffectSummary::default();

        match effect {
            Effect::DrawCards(count) => {
                summary.cards_drawn = ctx.draw_cards(*count as usize);
                if summary.cards_drawn < *count as usize {
                    debug!(wanted = count, drawn = summary.cards_drawn, "short draw");
                }
            }
            Effect::AddActions(count) => {
                ctx.add_actions(*count);
                summary.actions = *count;
            }
            Effect::AddBuys(count) => {
                ctx.add_buys(*count);
                summary.buys = *count;
            }
            Effect::AddMoney(amount) => {
                ctx.add_money(*amount);
                summary.money = *amount;
            }
            Effect::ReshuffleDiscard => {
                ctx.reshuffle_discard();
                summary.reshuffles = 1;
            }
            Effect::Batch(effects) => {
                for inner in effects {
                    summary.absorb(Self::resolve(inner, ctx));
                }
            }
        }

        summary
    }
}
