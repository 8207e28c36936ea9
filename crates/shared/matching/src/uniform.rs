use agora_core::Agent;
use agora_ports::PartnerSelector;
use rand::RngCore;

use crate::{everyone, pick};

/// Uniform random choice over all candidates
#[derive(Debug, Default)]
pub struct UniformSelector;

impl UniformSelector {
    pub fn new() -> Self {
        Self
    }
}

impl PartnerSelector for UniformSelector {
    fn name(&self) -> &str {
        "Uniform"
    }

    fn select(
        &mut self,
        _agent: &Agent,
        candidates: &[&Agent],
        rng: &mut dyn RngCore,
    ) -> Option<usize> {
        pick(&everyone(candidates.len()), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_partner_selector;
    use agora_core::{AgentId, PartnerSelection, PriceTable, Stock};
    use rand::{SeedableRng, rngs::StdRng};

    fn agent(id: &str) -> Agent {
        Agent::spawn(
            AgentId::new(id),
            "test",
            0,
            &Stock::new(),
            &Stock::new(),
            &PriceTable::new(),
            0,
        )
    }

    #[test]
    fn test_uniform_covers_all_candidates() {
        let me = agent("me1");
        let others: Vec<Agent> = (2..6).map(|i| agent(&format!("o{i}"))).collect();
        let candidates: Vec<&Agent> = others.iter().collect();

        let mut selector = UniformSelector::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = vec![false; candidates.len()];
        for _ in 0..200 {
            seen[selector.select(&me, &candidates, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        let me = agent("me1");
        let mut selector = UniformSelector::new();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(selector.select(&me, &[], &mut rng), None);
    }

    #[test]
    fn test_factory_names() {
        assert_eq!(
            create_partner_selector(PartnerSelection::Affinity).name(),
            "Affinity"
        );
        assert_eq!(
            create_partner_selector(PartnerSelection::CoinFlip).name(),
            "Coin Flip"
        );
        assert_eq!(
            create_partner_selector(PartnerSelection::Uniform).name(),
            "Uniform"
        );
    }
}
