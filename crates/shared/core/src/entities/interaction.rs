use serde::{Deserialize, Serialize};

use super::AgentId;
use crate::values::{Price, Product, Step};

/// How a cash sale came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleKind {
    /// The buyer wanted the product
    Direct,
    /// The buyer picked up an underpriced product it did not want
    Opportunistic,
}

/// Outcome of one pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interaction {
    /// One unit each way, no cash
    Barter {
        step: Step,
        initiator: AgentId,
        partner: AgentId,
        initiator_gave: Product,
        partner_gave: Product,
    },
    /// One unit for cash
    Sale {
        step: Step,
        seller: AgentId,
        buyer: AgentId,
        product: Product,
        price: Price,
        kind: SaleKind,
    },
    NoTrade {
        step: Step,
        initiator: AgentId,
        partner: AgentId,
    },
}

/// A single unit changing hands: `(seller, buyer, product, unit price)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub seller: AgentId,
    pub buyer: AgentId,
    pub product: Product,
    /// `None` for barter
    pub unit_price: Option<Price>,
}

impl Interaction {
    pub fn step(&self) -> Step {
        match self {
            Interaction::Barter { step, .. }
            | Interaction::Sale { step, .. }
            | Interaction::NoTrade { step, .. } => *step,
        }
    }

    pub fn is_trade(&self) -> bool {
        !matches!(self, Interaction::NoTrade { .. })
    }

    /// Units that changed hands, in settlement order
    pub fn transfers(&self) -> Vec<Transfer> {
        match self {
            Interaction::Barter {
                initiator,
                partner,
                initiator_gave,
                partner_gave,
                ..
            } => vec![
                Transfer {
                    seller: initiator.clone(),
                    buyer: partner.clone(),
                    product: initiator_gave.clone(),
                    unit_price: None,
                },
                Transfer {
                    seller: partner.clone(),
                    buyer: initiator.clone(),
                    product: partner_gave.clone(),
                    unit_price: None,
                },
            ],
            Interaction::Sale {
                seller,
                buyer,
                product,
                price,
                ..
            } => vec![Transfer {
                seller: seller.clone(),
                buyer: buyer.clone(),
                product: product.clone(),
                unit_price: Some(*price),
            }],
            Interaction::NoTrade { .. } => Vec::new(),
        }
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interaction::Barter {
                initiator,
                partner,
                initiator_gave,
                partner_gave,
                ..
            } => write!(
                f,
                "{initiator} and {partner} swap 1 {initiator_gave} for 1 {partner_gave}"
            ),
            Interaction::Sale {
                seller,
                buyer,
                product,
                price,
                kind: SaleKind::Direct,
                ..
            } => write!(f, "{seller} to {buyer}: sells 1 {product} at {price}"),
            Interaction::Sale {
                seller,
                buyer,
                product,
                price,
                kind: SaleKind::Opportunistic,
                ..
            } => write!(
                f,
                "{buyer} buys 1 {product} from {seller} at {price} (opportunistic)"
            ),
            Interaction::NoTrade {
                initiator, partner, ..
            } => write!(f, "{initiator} and {partner} interacted but no trade."),
        }
    }
}
