use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::AgentSnapshot;
use crate::values::{Cash, Price, PriceTable, Product, Step, Stock, Units};

/// Unique identifier for an agent (`type` + ordinal, e.g. `seller1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Last observed offers and wants of a former partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acquaintance {
    pub sells: Stock,
    pub buys: Stock,
    /// Step at which the snapshot was taken
    pub last_seen: Step,
}

impl Acquaintance {
    /// True if the partner was last seen offering any of `wanted`
    pub fn offers_any_of(&self, wanted: &Stock) -> bool {
        self.sells
            .iter()
            .any(|(product, &qty)| qty > 0 && wanted.get(product).is_some_and(|&w| w > 0))
    }
}

/// What happened to a unit an agent received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receipt {
    /// The unit satisfied one unit of an outstanding want
    Consumed,
    /// The unit was unwanted and is now offered for resale
    Restocked,
}

/// Economic actor in the marketplace
///
/// Quantities never go negative and `sells` / `buys` never hold zero entries:
/// an entry (and its quote) is removed as soon as it reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    /// Roster type the agent was spawned from
    pub kind: String,
    pub cash: Cash,
    /// Product -> units still offered
    pub sells: Stock,
    /// Product -> units still wanted
    pub buys: Stock,
    /// Product -> units physically held
    pub inventory: Stock,
    pub initial_sells: Stock,
    pub initial_buys: Stock,
    /// Valuation anchors, fixed for the agent's lifetime
    pub reference_prices: PriceTable,
    /// Current ask quotes
    pub sell_prices: PriceTable,
    /// Current bid ceilings
    pub buy_prices: PriceTable,
    /// Partner -> last observed snapshot. Never pruned.
    pub known: IndexMap<AgentId, Acquaintance>,
    /// The agent is not free before this step
    pub busy_until: Step,
    pub entered_at: Step,
}

impl Agent {
    /// Create an agent entering the market at `step`
    ///
    /// Zero-quantity offers and wants are dropped. Quotes for every offer and want
    /// are seeded from the reference table.
    pub fn spawn(
        id: AgentId,
        kind: impl Into<String>,
        cash: Cash,
        sells: &Stock,
        buys: &Stock,
        reference_prices: &PriceTable,
        step: Step,
    ) -> Self {
        let sells: Stock = sells
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(p, q)| (p.clone(), *q))
            .collect();
        let buys: Stock = buys
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(p, q)| (p.clone(), *q))
            .collect();

        let sell_prices = seed_quotes(&sells, reference_prices);
        let buy_prices = seed_quotes(&buys, reference_prices);

        Self {
            id,
            kind: kind.into(),
            cash,
            inventory: sells.clone(),
            initial_sells: sells.clone(),
            initial_buys: buys.clone(),
            sells,
            buys,
            reference_prices: reference_prices.clone(),
            sell_prices,
            buy_prices,
            known: IndexMap::new(),
            busy_until: step,
            entered_at: step,
        }
    }

    pub fn is_free(&self, now: Step) -> bool {
        now >= self.busy_until
    }

    /// Offered and physically held
    pub fn can_deliver(&self, product: &str) -> bool {
        self.sells.get(product).is_some_and(|&q| q > 0)
            && self.inventory.get(product).is_some_and(|&q| q > 0)
    }

    pub fn wants(&self, product: &str) -> bool {
        self.buys.get(product).is_some_and(|&q| q > 0)
    }

    pub fn sell_price(&self, product: &str) -> Option<Price> {
        self.sell_prices.get(product).copied()
    }

    pub fn buy_price(&self, product: &str) -> Option<Price> {
        self.buy_prices.get(product).copied()
    }

    pub fn reference_price(&self, product: &str) -> Option<Price> {
        self.reference_prices.get(product).copied()
    }

    pub fn knows(&self, other: &AgentId) -> bool {
        self.known.contains_key(other)
    }

    /// Products currently offered, in offer order
    pub fn offered(&self) -> impl Iterator<Item = &Product> {
        self.sells.iter().filter(|(_, q)| **q > 0).map(|(p, _)| p)
    }

    /// Products currently wanted, in want order
    pub fn wanted(&self) -> impl Iterator<Item = &Product> {
        self.buys.iter().filter(|(_, q)| **q > 0).map(|(p, _)| p)
    }

    /// Refresh the acquaintance memory for `other`
    pub fn remember(&mut self, other: &Agent, step: Step) {
        self.known.insert(
            other.id.clone(),
            Acquaintance {
                sells: other.sells.clone(),
                buys: other.buys.clone(),
                last_seen: step,
            },
        );
    }

    /// Hand over one offered unit
    ///
    /// # Panics
    /// If the product is not offered and held; the negotiator checks this first.
    pub fn deliver(&mut self, product: &str) {
        assert!(
            self.can_deliver(product),
            "{} cannot deliver {product}: not offered or not held",
            self.id
        );
        if take_one(&mut self.sells, product) == 0 {
            self.sell_prices.shift_remove(product);
        }
        take_one(&mut self.inventory, product);
    }

    /// Take one unit into inventory
    ///
    /// A wanted unit decrements the want (dropping the entry and its quote at zero).
    /// An unwanted unit becomes a resale offer; if the product was not already on
    /// offer its ask is seeded from the reference table, falling back to
    /// `fallback_quote`.
    pub fn receive(&mut self, product: &str, fallback_quote: Price) -> Receipt {
        *self.inventory.entry(product.to_string()).or_insert(0) += 1;

        if self.wants(product) {
            if take_one(&mut self.buys, product) == 0 {
                self.buy_prices.shift_remove(product);
            }
            return Receipt::Consumed;
        }

        if !self.sells.contains_key(product) {
            let quote = self
                .reference_price(product)
                .unwrap_or(fallback_quote)
                .max(1);
            self.sell_prices.insert(product.to_string(), quote);
        }
        *self.sells.entry(product.to_string()).or_insert(0) += 1;
        Receipt::Restocked
    }

    /// # Panics
    /// If the balance does not cover `amount`.
    pub fn pay(&mut self, amount: Cash) {
        assert!(
            self.cash >= amount,
            "{} cannot pay {amount} with balance {}",
            self.id,
            self.cash
        );
        self.cash -= amount;
    }

    pub fn collect(&mut self, amount: Cash) {
        self.cash += amount;
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            id: self.id.clone(),
            kind: self.kind.clone(),
            cash: self.cash,
            sells: self.sells.clone(),
            buys: self.buys.clone(),
            inventory: self.inventory.clone(),
            sell_prices: self.sell_prices.clone(),
            buy_prices: self.buy_prices.clone(),
            initial_sells: self.initial_sells.clone(),
            initial_buys: self.initial_buys.clone(),
            busy_until: self.busy_until,
            known_partners: self.known.len(),
        }
    }
}

fn seed_quotes(stock: &Stock, reference: &PriceTable) -> PriceTable {
    stock
        .keys()
        .filter_map(|p| reference.get(p).map(|price| (p.clone(), *price)))
        .collect()
}

/// Decrement by one, removing the entry at zero. Returns what is left.
fn take_one(stock: &mut Stock, product: &str) -> Units {
    let Some(qty) = stock.get_mut(product) else {
        return 0;
    };
    *qty = qty.saturating_sub(1);
    let left = *qty;
    if left == 0 {
        stock.shift_remove(product);
    }
    left
}
