use agora_core::Price;

/// Port for ranking opportunistic purchases
pub trait PurchaseScorer: Send {
    /// Score buying at `ask` a product the buyer values at `reference`
    ///
    /// Only called when `ask < reference`. The highest score wins; on ties the
    /// product offered first is kept.
    fn score(&self, reference: Price, ask: Price) -> i64;

    /// Get the name of the scorer
    fn name(&self) -> &str;
}
