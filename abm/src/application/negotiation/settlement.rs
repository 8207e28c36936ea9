//! Settlement: applies a trade plan to exactly the two paired agents

use agora_core::{Agent, Interaction, Step};

use super::{SaleDirection, TradePlan};

/// Move goods and cash for `plan` and describe what happened
///
/// The negotiator only plans trades whose preconditions hold, so the
/// `Agent` mutators never trip their assertions here.
pub fn settle(plan: TradePlan, initiator: &mut Agent, partner: &mut Agent, step: Step) -> Interaction {
    match plan {
        TradePlan::Barter {
            initiator_gives,
            partner_gives,
        } => {
            // both units are wanted by their receivers, so neither is restocked
            initiator.deliver(&initiator_gives);
            partner.deliver(&partner_gives);
            partner.receive(&initiator_gives, 1);
            initiator.receive(&partner_gives, 1);

            Interaction::Barter {
                step,
                initiator: initiator.id.clone(),
                partner: partner.id.clone(),
                initiator_gave: initiator_gives,
                partner_gave: partner_gives,
            }
        }
        TradePlan::Sale {
            direction,
            product,
            price,
            kind,
        } => {
            let (seller, buyer) = match direction {
                SaleDirection::InitiatorSells => (initiator, partner),
                SaleDirection::PartnerSells => (partner, initiator),
            };

            buyer.pay(price);
            seller.deliver(&product);
            seller.collect(price);
            buyer.receive(&product, price);

            Interaction::Sale {
                step,
                seller: seller.id.clone(),
                buyer: buyer.id.clone(),
                product,
                price,
                kind,
            }
        }
        TradePlan::Nothing => Interaction::NoTrade {
            step,
            initiator: initiator.id.clone(),
            partner: partner.id.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::{AgentId, PriceTable, SaleKind, Stock};

    #[test]
    #[should_panic(expected = "cannot deliver")]
    fn test_settling_an_impossible_sale_panics() {
        let table: PriceTable = [("bread".to_string(), 10)].into_iter().collect();
        let mut a = Agent::spawn(AgentId::new("a1"), "a", 100, &Stock::new(), &Stock::new(), &table, 0);
        let mut b = Agent::spawn(AgentId::new("b2"), "b", 100, &Stock::new(), &Stock::new(), &table, 0);

        settle(
            TradePlan::Sale {
                direction: SaleDirection::InitiatorSells,
                product: "bread".to_string(),
                price: 10,
                kind: SaleKind::Direct,
            },
            &mut a,
            &mut b,
            0,
        );
    }
}
