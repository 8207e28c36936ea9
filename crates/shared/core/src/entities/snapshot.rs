use serde::{Deserialize, Serialize};

use super::{AgentId, Interaction};
use crate::values::{Cash, PriceTable, Product, Step, Stock, Units};

/// Point-in-time copy of one agent, handed to reporters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub kind: String,
    pub cash: Cash,
    pub sells: Stock,
    pub buys: Stock,
    pub inventory: Stock,
    pub sell_prices: PriceTable,
    pub buy_prices: PriceTable,
    pub initial_sells: Stock,
    pub initial_buys: Stock,
    pub busy_until: Step,
    pub known_partners: usize,
}

impl AgentSnapshot {
    /// Units sold out of the initial offer, per product (only non-zero)
    pub fn sold(&self) -> Vec<(&Product, Units)> {
        self.initial_sells
            .iter()
            .filter_map(|(product, &initial)| {
                let left = self.sells.get(product).copied().unwrap_or(0);
                let sold = initial.saturating_sub(left);
                (sold > 0).then_some((product, sold))
            })
            .collect()
    }

    /// Units held, per product (only non-zero)
    pub fn holdings(&self) -> Vec<(&Product, Units)> {
        self.inventory
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(p, q)| (p, *q))
            .collect()
    }
}

/// Full market state at the end of a step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub step: Step,
    /// In order of entry
    pub agents: Vec<AgentSnapshot>,
}

impl MarketSnapshot {
    pub fn agent(&self, id: &str) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.id.as_str() == id)
    }

    pub fn total_cash(&self) -> Cash {
        self.agents.iter().map(|a| a.cash).sum()
    }

    /// Units of `product` held across all agents
    pub fn total_units(&self, product: &str) -> u64 {
        self.agents
            .iter()
            .map(|a| a.inventory.get(product).copied().unwrap_or(0) as u64)
            .sum()
    }
}

/// Everything that happened in one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub step: Step,
    /// Agents that entered at this step
    pub entered: Vec<AgentId>,
    /// One entry per pairing, in pairing order
    pub interactions: Vec<Interaction>,
    pub snapshot: MarketSnapshot,
}

impl StepReport {
    pub fn trades(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter().filter(|i| i.is_trade())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(items: &[(&str, Units)]) -> Stock {
        items.iter().map(|(p, q)| (p.to_string(), *q)).collect()
    }

    fn snapshot(id: &str, cash: Cash, initial: Stock, sells: Stock, inventory: Stock) -> AgentSnapshot {
        AgentSnapshot {
            id: AgentId::new(id),
            kind: "test".to_string(),
            cash,
            sells,
            buys: Stock::new(),
            inventory,
            sell_prices: PriceTable::new(),
            buy_prices: PriceTable::new(),
            initial_sells: initial,
            initial_buys: Stock::new(),
            busy_until: 0,
            known_partners: 0,
        }
    }

    #[test]
    fn test_sold_counts_only_depleted_offers() {
        let agent = snapshot(
            "s1",
            10,
            stock(&[("bread", 5), ("milk", 2)]),
            stock(&[("bread", 4), ("milk", 2)]),
            stock(&[("bread", 4), ("milk", 2)]),
        );

        let sold = agent.sold();
        assert_eq!(sold.len(), 1);
        assert_eq!(sold[0].0, "bread");
        assert_eq!(sold[0].1, 1);
    }

    #[test]
    fn test_sold_ignores_resale_growth() {
        let agent = snapshot(
            "s1",
            0,
            stock(&[("bread", 1)]),
            stock(&[("bread", 3)]),
            stock(&[("bread", 3)]),
        );
        assert!(agent.sold().is_empty());
    }

    #[test]
    fn test_market_totals() {
        let market = MarketSnapshot {
            step: 3,
            agents: vec![
                snapshot("a1", 10, Stock::new(), Stock::new(), stock(&[("salt", 2)])),
                snapshot("b2", 32, Stock::new(), Stock::new(), stock(&[("salt", 1)])),
            ],
        };

        assert_eq!(market.total_cash(), 42);
        assert_eq!(market.total_units("salt"), 3);
        assert_eq!(market.total_units("pepper"), 0);
        assert!(market.agent("b2").is_some());
        assert!(market.agent("c3").is_none());
    }
}
