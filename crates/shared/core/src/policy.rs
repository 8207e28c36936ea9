//! Market policies
//!
//! The marketplace grew through three behaviours (plain cash trade, then barter and
//! opportunistic buying, then partner affinity and purchase scoring). Each difference
//! is a named policy here rather than a separate agent type.

use serde::{Deserialize, Serialize};

/// How an agent picks a partner among free candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartnerSelection {
    /// Prefer a known partner last seen offering something we want, else uniform
    #[default]
    Affinity,
    /// Fair coin between known and unknown candidates
    CoinFlip,
    /// Uniform over all candidates
    Uniform,
}

/// When quotes are adapted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceAdaptation {
    /// Both parties, after every pairing
    #[default]
    EveryInteraction,
    /// Both parties, only when the pairing produced no trade
    NoTradeOnly,
    Never,
}

/// How the initiator chooses among underpriced products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurchaseScoring {
    /// Maximize `(reference - ask) - ask * 0.1`
    #[default]
    Scored,
    /// First qualifying product in the partner's offer order
    FirstQualifying,
    /// No opportunistic purchases
    Disabled,
}

/// Complete behavioural configuration of a market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketPolicy {
    pub partner_selection: PartnerSelection,
    pub price_adaptation: PriceAdaptation,
    pub purchase_scoring: PurchaseScoring,
    /// Try a goods-for-goods swap before any cash sale
    pub barter: bool,
}

impl MarketPolicy {
    /// Cash sales only, fixed prices, coin-flip partner choice
    pub fn cash_only() -> Self {
        Self {
            partner_selection: PartnerSelection::CoinFlip,
            price_adaptation: PriceAdaptation::Never,
            purchase_scoring: PurchaseScoring::Disabled,
            barter: false,
        }
    }

    /// Adds barter, first-qualifying opportunistic buys and price adaptation
    pub fn barter() -> Self {
        Self {
            partner_selection: PartnerSelection::CoinFlip,
            price_adaptation: PriceAdaptation::EveryInteraction,
            purchase_scoring: PurchaseScoring::FirstQualifying,
            barter: true,
        }
    }

    /// Adds partner affinity and scored opportunistic buys
    pub fn adaptive() -> Self {
        Self {
            partner_selection: PartnerSelection::Affinity,
            price_adaptation: PriceAdaptation::EveryInteraction,
            purchase_scoring: PurchaseScoring::Scored,
            barter: true,
        }
    }
}

impl Default for MarketPolicy {
    fn default() -> Self {
        Self::adaptive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_adaptive() {
        assert_eq!(MarketPolicy::default(), MarketPolicy::adaptive());
    }

    #[test]
    fn test_partial_policy_fills_defaults() {
        let policy: MarketPolicy =
            serde_json::from_str(r#"{"partner_selection": "coin-flip", "barter": false}"#)
                .unwrap();

        assert_eq!(policy.partner_selection, PartnerSelection::CoinFlip);
        assert!(!policy.barter);
        assert_eq!(policy.price_adaptation, PriceAdaptation::EveryInteraction);
        assert_eq!(policy.purchase_scoring, PurchaseScoring::Scored);
    }

    #[test]
    fn test_kebab_case_names() {
        let scoring: PurchaseScoring = serde_json::from_str(r#""first-qualifying""#).unwrap();
        assert_eq!(scoring, PurchaseScoring::FirstQualifying);

        let trigger: PriceAdaptation = serde_json::from_str(r#""no-trade-only""#).unwrap();
        assert_eq!(trigger, PriceAdaptation::NoTradeOnly);
    }
}
