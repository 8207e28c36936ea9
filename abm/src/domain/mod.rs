//! Domain layer: Pure business logic and value objects

mod arrivals;
mod pricing;
mod valuation;

pub use arrivals::{ArrivalScheduler, PendingSpawn};
pub use pricing::{PriceAdapter, decayed_ask, raised_bid};
pub use valuation::{DiscountScorer, FirstQualifyingScorer, create_purchase_scorer};
