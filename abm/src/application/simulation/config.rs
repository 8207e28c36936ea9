//! Market configuration

use agora_core::{
    Cash, ConfigError, ConfigResult, MarketPolicy, Price, PriceTable, Product, RosterEntry, Step,
};
use serde::{Deserialize, Serialize};

/// Everything needed to build a [`Marketplace`](super::Marketplace)
///
/// Deserializes from the input document: `cash`, `prices`, `T` (or `cooldown`),
/// `agents`, `policy`, `seed`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Starting cash for agents whose roster entry sets none
    #[serde(default)]
    pub cash: Cash,
    /// Reference price per product
    #[serde(default)]
    pub prices: PriceTable,
    /// Steps an agent stays busy after a pairing
    #[serde(rename = "T", alias = "cooldown", default = "default_cooldown")]
    pub cooldown: Step,
    #[serde(default)]
    pub agents: Vec<RosterEntry>,
    #[serde(default)]
    pub policy: MarketPolicy,
    /// Fixed RNG seed; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_cooldown() -> Step {
    3
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            cash: 0,
            prices: PriceTable::new(),
            cooldown: default_cooldown(),
            agents: Vec::new(),
            policy: MarketPolicy::default(),
            seed: None,
        }
    }
}

impl MarketConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cash(mut self, cash: Cash) -> Self {
        self.cash = cash;
        self
    }

    pub fn with_price(mut self, product: impl Into<Product>, price: Price) -> Self {
        self.prices.insert(product.into(), price);
        self
    }

    pub fn with_cooldown(mut self, cooldown: Step) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_agent(mut self, entry: RosterEntry) -> Self {
        self.agents.push(entry);
        self
    }

    pub fn with_policy(mut self, policy: MarketPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Market-wide checks. Roster entries are checked when they are scheduled.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.cooldown == 0 {
            return Err(ConfigError::ZeroCooldown);
        }

        if let Some((product, _)) = self.prices.iter().find(|(_, price)| **price == 0) {
            return Err(ConfigError::InvalidReferencePrice {
                product: product.clone(),
            });
        }

        Ok(())
    }
}
