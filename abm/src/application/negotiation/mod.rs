//! Trade Negotiation
//!
//! Resolves what a pairing does, in strict precedence:
//! barter, cash sale initiator to partner, cash sale partner to initiator,
//! opportunistic purchase by the initiator, nothing.

mod settlement;

pub use settlement::settle;

use agora_core::{Agent, Interaction, MarketPolicy, Price, Product, SaleKind, Step};
use agora_ports::PurchaseScorer;

use crate::domain::create_purchase_scorer;

/// Which side of the pairing hands over the goods in a cash sale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleDirection {
    InitiatorSells,
    PartnerSells,
}

/// Outcome chosen by the negotiator, before anything moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradePlan {
    Barter {
        initiator_gives: Product,
        partner_gives: Product,
    },
    Sale {
        direction: SaleDirection,
        product: Product,
        price: Price,
        kind: SaleKind,
    },
    Nothing,
}

/// Decides and settles the interaction between two paired agents
pub struct TradeNegotiator {
    barter: bool,
    scorer: Option<Box<dyn PurchaseScorer>>,
}

impl TradeNegotiator {
    pub fn new(policy: &MarketPolicy) -> Self {
        Self {
            barter: policy.barter,
            scorer: create_purchase_scorer(policy.purchase_scoring),
        }
    }

    pub fn barter_enabled(&self) -> bool {
        self.barter
    }

    /// Name of the opportunistic purchase scorer, if any
    pub fn scorer(&self) -> Option<&str> {
        self.scorer.as_deref().map(|s| s.name())
    }

    /// Pick the first applicable trade without mutating either agent
    pub fn plan(&self, initiator: &Agent, partner: &Agent) -> TradePlan {
        if self.barter {
            if let Some((initiator_gives, partner_gives)) = find_barter(initiator, partner) {
                return TradePlan::Barter {
                    initiator_gives,
                    partner_gives,
                };
            }
        }

        if let Some((product, price)) = find_sale(initiator, partner) {
            return TradePlan::Sale {
                direction: SaleDirection::InitiatorSells,
                product,
                price,
                kind: SaleKind::Direct,
            };
        }

        if let Some((product, price)) = find_sale(partner, initiator) {
            return TradePlan::Sale {
                direction: SaleDirection::PartnerSells,
                product,
                price,
                kind: SaleKind::Direct,
            };
        }

        if let Some((product, price)) = self.find_bargain(initiator, partner) {
            return TradePlan::Sale {
                direction: SaleDirection::PartnerSells,
                product,
                price,
                kind: SaleKind::Opportunistic,
            };
        }

        TradePlan::Nothing
    }

    /// Plan, settle and let both parties remember each other
    pub fn negotiate(&self, initiator: &mut Agent, partner: &mut Agent, step: Step) -> Interaction {
        let plan = self.plan(initiator, partner);
        let interaction = settle(plan, initiator, partner, step);

        initiator.remember(partner, step);
        partner.remember(initiator, step);

        interaction
    }

    /// Best underpriced product the partner offers and the initiator does not want
    fn find_bargain(&self, initiator: &Agent, partner: &Agent) -> Option<(Product, Price)> {
        let scorer = self.scorer.as_deref()?;
        let mut best: Option<(i64, &Product, Price)> = None;

        for product in partner.offered() {
            if initiator.wants(product) || !partner.can_deliver(product) {
                continue;
            }
            let (Some(ask), Some(reference)) = (
                partner.sell_price(product),
                initiator.reference_price(product),
            ) else {
                continue;
            };
            if ask >= reference || ask > initiator.cash {
                continue;
            }

            let score = scorer.score(reference, ask);
            // strict: the first of equal scores is kept
            if best.is_none_or(|(top, _, _)| score > top) {
                best = Some((score, product, ask));
            }
        }

        best.map(|(_, product, ask)| (product.clone(), ask))
    }
}

/// First product the seller can deliver that the buyer wants and can afford at the ask
fn find_sale(seller: &Agent, buyer: &Agent) -> Option<(Product, Price)> {
    seller.offered().find_map(|product| {
        if !seller.can_deliver(product) || !buyer.wants(product) {
            return None;
        }
        let price = seller.sell_price(product)?;
        let affordable =
            buyer.cash >= price && buyer.buy_price(product).is_some_and(|bid| bid >= price);
        affordable.then(|| (product.clone(), price))
    })
}

/// First mutually wanted pair of distinct products, each side in its own offer order
///
/// The initiator's products are tried in turn, so an offer whose only
/// counterpart is the same product does not hide a later valid swap.
fn find_barter(initiator: &Agent, partner: &Agent) -> Option<(Product, Product)> {
    initiator
        .offered()
        .filter(|p| initiator.can_deliver(p) && partner.wants(p))
        .find_map(|gives| {
            partner
                .offered()
                .find(|q| *q != gives && partner.can_deliver(q) && initiator.wants(q))
                .map(|takes| (gives.clone(), takes.clone()))
        })
}
