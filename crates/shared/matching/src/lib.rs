//! Agora Partner Selection
//!
//! Implementations of partner selection policies for the Agora marketplace.

mod affinity;
mod coin_flip;
mod uniform;

pub use affinity::AffinitySelector;
pub use coin_flip::CoinFlipSelector;
pub use uniform::UniformSelector;

// Re-export the trait from ports for convenience
pub use agora_ports::PartnerSelector;

use agora_core::PartnerSelection;
use rand::{RngCore, seq::SliceRandom};

/// Factory function to create a partner selector for a policy
pub fn create_partner_selector(policy: PartnerSelection) -> Box<dyn PartnerSelector> {
    match policy {
        PartnerSelection::Affinity => Box::new(AffinitySelector::new()),
        PartnerSelection::CoinFlip => Box::new(CoinFlipSelector::new()),
        PartnerSelection::Uniform => Box::new(UniformSelector::new()),
    }
}

/// Uniform pick from a pool of candidate indices
fn pick(pool: &[usize], rng: &mut dyn RngCore) -> Option<usize> {
    pool.choose(rng).copied()
}

/// Every candidate index, in candidate order
fn everyone(len: usize) -> Vec<usize> {
    (0..len).collect()
}
