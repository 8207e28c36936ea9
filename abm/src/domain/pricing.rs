//! Price adaptation
//!
//! A simple tâtonnement: unsold offers get cheaper, unmet wants get more urgent.

use agora_core::{Agent, Interaction, Price, PriceAdaptation};

/// Ask after one round of decay: `max(1, floor(ask * 0.9))`
pub fn decayed_ask(ask: Price) -> Price {
    (ask.saturating_mul(9) / 10).max(1)
}

/// Bid ceiling after one round of growth: `floor(bid * 1.1)`
pub fn raised_bid(bid: Price) -> Price {
    bid.saturating_mul(11) / 10
}

/// Applies quote adaptation according to the configured trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceAdapter {
    trigger: PriceAdaptation,
}

impl PriceAdapter {
    pub fn new(trigger: PriceAdaptation) -> Self {
        Self { trigger }
    }

    pub fn trigger(&self) -> PriceAdaptation {
        self.trigger
    }

    /// Whether this interaction triggers adaptation
    pub fn applies_to(&self, interaction: &Interaction) -> bool {
        match self.trigger {
            PriceAdaptation::EveryInteraction => true,
            PriceAdaptation::NoTradeOnly => !interaction.is_trade(),
            PriceAdaptation::Never => false,
        }
    }

    /// Adapt both parties if the trigger fires. Returns whether it did.
    pub fn after_interaction(
        &self,
        interaction: &Interaction,
        initiator: &mut Agent,
        partner: &mut Agent,
    ) -> bool {
        if !self.applies_to(interaction) {
            return false;
        }
        Self::adapt(initiator);
        Self::adapt(partner);
        true
    }

    /// Decay every active ask and raise every active bid
    pub fn adapt(agent: &mut Agent) {
        for (product, qty) in &agent.sells {
            if *qty == 0 {
                continue;
            }
            if let Some(ask) = agent.sell_prices.get_mut(product) {
                *ask = decayed_ask(*ask);
            }
        }

        for (product, qty) in &agent.buys {
            if *qty == 0 {
                continue;
            }
            if let Some(bid) = agent.buy_prices.get_mut(product) {
                *bid = raised_bid(*bid);
            }
        }
    }
}
