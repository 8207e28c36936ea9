//! Simulation Framework
//!
//! The marketplace step loop and everything it owns.
//!
//! # Architecture
//!
//! Each step the [`Marketplace`] coordinates:
//! - Arrivals (agents due this step enter the [`AgentBook`])
//! - Pairing of free agents (matching engine)
//! - Negotiation and settlement of each pair
//! - Price adaptation
//! - Metrics collection

mod book;
mod config;
mod metrics;
mod runner;

pub use book::AgentBook;
pub use config::MarketConfig;
pub use metrics::MarketMetrics;
pub use runner::{Marketplace, RunLimit, StepBudget};
