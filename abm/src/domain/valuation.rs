//! Opportunistic purchase scoring

use agora_core::{Price, PurchaseScoring};
use agora_ports::PurchaseScorer;

/// Discount to reference minus a 10% handling penalty on the ask
///
/// `(reference - ask) - ask * 0.1`, kept in tenths so it stays exact.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscountScorer;

impl PurchaseScorer for DiscountScorer {
    fn score(&self, reference: Price, ask: Price) -> i64 {
        let discount = reference as i64 - ask as i64;
        discount * 10 - ask as i64
    }

    fn name(&self) -> &str {
        "Discount"
    }
}

/// Every qualifying product scores the same, so the first one offered wins
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstQualifyingScorer;

impl PurchaseScorer for FirstQualifyingScorer {
    fn score(&self, _reference: Price, _ask: Price) -> i64 {
        0
    }

    fn name(&self) -> &str {
        "First Qualifying"
    }
}

/// `None` when opportunistic purchases are disabled
pub fn create_purchase_scorer(policy: PurchaseScoring) -> Option<Box<dyn PurchaseScorer>> {
    match policy {
        PurchaseScoring::Scored => Some(Box::new(DiscountScorer)),
        PurchaseScoring::FirstQualifying => Some(Box::new(FirstQualifyingScorer)),
        PurchaseScoring::Disabled => None,
    }
}
