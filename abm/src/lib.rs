//! Agent-Based Model (ABM) for the Agora marketplace
//!
//! Heterogeneous agents enter over time, hold cash and inventories, and are
//! paired every step to barter, trade for cash, or walk away. Prices adapt
//! after each pairing.
//!
//! ```no_run
//! use abm::{MarketConfig, Marketplace, RunLimit};
//! use agora_core::RosterEntry;
//! use agora_ports::NullReporter;
//!
//! let config = MarketConfig::new()
//!     .with_cash(100)
//!     .with_price("bread", 10)
//!     .with_agent(RosterEntry::new("seller").sells("bread", 5))
//!     .with_agent(RosterEntry::new("buyer").buys("bread", 2));
//!
//! let mut market = Marketplace::new(config).unwrap();
//! let metrics = market.run(RunLimit::Steps(10), &mut NullReporter);
//! println!("{} trades", metrics.trades());
//! ```

pub mod application;
pub mod domain;

// Re-export key types at crate root
pub use application::matching::{MatchingEngine, Pairing, PairingRound};
pub use application::negotiation::{SaleDirection, TradeNegotiator, TradePlan};
pub use application::simulation::{
    AgentBook, MarketConfig, MarketMetrics, Marketplace, RunLimit, StepBudget,
};
pub use domain::{ArrivalScheduler, PendingSpawn, PriceAdapter};
