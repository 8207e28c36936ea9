//! Declarative agent arrival roster

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::values::{Cash, PriceTable, Product, Step, Stock, Units};

/// One line of the roster: `count` agents of `kind` entering at `enters`
///
/// `enters` is an offset in cooldown periods; the arrival step is `enters * T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub enters: Step,
    #[serde(default)]
    pub sells: Stock,
    #[serde(default)]
    pub buys: Stock,
    /// Overrides the market-wide starting cash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash: Option<Cash>,
}

fn default_count() -> u32 {
    1
}

impl RosterEntry {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            count: default_count(),
            enters: 0,
            sells: Stock::new(),
            buys: Stock::new(),
            cash: None,
        }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn enters(mut self, offset: Step) -> Self {
        self.enters = offset;
        self
    }

    pub fn sells(mut self, product: impl Into<Product>, qty: Units) -> Self {
        self.sells.insert(product.into(), qty);
        self
    }

    pub fn buys(mut self, product: impl Into<Product>, qty: Units) -> Self {
        self.buys.insert(product.into(), qty);
        self
    }

    pub fn cash(mut self, cash: Cash) -> Self {
        self.cash = Some(cash);
        self
    }

    /// Check the entry against the price table, returning its agent type
    pub fn validate(&self, index: usize, prices: &PriceTable) -> ConfigResult<&str> {
        let kind = self
            .kind
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingAgentType { index })?;

        let unpriced = self
            .sells
            .keys()
            .chain(self.buys.keys())
            .find(|product| !prices.contains_key(product.as_str()));

        match unpriced {
            Some(product) => Err(ConfigError::UnknownProduct {
                index,
                kind: kind.to_string(),
                product: product.clone(),
            }),
            None => Ok(kind),
        }
    }
}
