use agora_core::{Cash, Interaction, SaleKind, Step};
use serde::{Deserialize, Serialize};

/// Counters aggregated over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketMetrics {
    /// Steps executed
    pub steps: Step,
    /// Agents that entered the market
    pub arrivals: u64,
    /// Pairings formed, whatever their outcome
    pub pairings: u64,
    pub barters: u64,
    pub direct_sales: u64,
    pub opportunistic_purchases: u64,
    pub no_trades: u64,
    /// Cash moved by sales
    pub cash_turnover: Cash,
}

impl MarketMetrics {
    /// Count one pairing outcome
    pub fn record(&mut self, interaction: &Interaction) {
        self.pairings += 1;
        match interaction {
            Interaction::Barter { .. } => self.barters += 1,
            Interaction::Sale { price, kind, .. } => {
                self.cash_turnover += price;
                match kind {
                    SaleKind::Direct => self.direct_sales += 1,
                    SaleKind::Opportunistic => self.opportunistic_purchases += 1,
                }
            }
            Interaction::NoTrade { .. } => self.no_trades += 1,
        }
    }

    /// Pairings that moved goods
    pub fn trades(&self) -> u64 {
        self.barters + self.direct_sales + self.opportunistic_purchases
    }
}
