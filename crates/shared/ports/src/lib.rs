//! Agora Ports
//!
//! Port definitions (traits) for the Agora marketplace.
//! These define the boundaries between the simulation core, its pluggable
//! policies, and the reporting shell.

mod clock;
mod matching;
mod reporting;
mod valuation;

pub use clock::Clock;
pub use matching::PartnerSelector;
pub use reporting::{MarketReporter, NullReporter};
pub use valuation::PurchaseScorer;
