//! Matching Engine
//!
//! Pairs free agents once per step. The free set is shuffled once and walked in
//! that order; pairs are handed out one at a time so each pair is negotiated
//! before the next partner choice, and later choices see earlier outcomes.

use agora_clock::StepClock;
use agora_core::{Agent, Step};
use agora_ports::PartnerSelector;
use log::trace;
use rand::{rngs::StdRng, seq::SliceRandom};

/// Two agents bound together for one interaction (indices into the agent book)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub initiator: usize,
    pub partner: usize,
}

/// Pairing state for a single step
#[derive(Debug, Clone)]
pub struct PairingRound {
    /// Free agents in shuffled order
    order: Vec<usize>,
    /// Indexed by agent index
    consumed: Vec<bool>,
    cursor: usize,
}

impl PairingRound {
    /// Free agents in the order they will be offered a partner
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn is_consumed(&self, idx: usize) -> bool {
        self.consumed.get(idx).copied().unwrap_or(false)
    }
}

/// Produces disjoint pairs from the free agents of a step
pub struct MatchingEngine {
    selector: Box<dyn PartnerSelector>,
}

impl MatchingEngine {
    pub fn new(selector: Box<dyn PartnerSelector>) -> Self {
        Self { selector }
    }

    /// Name of the partner selection policy
    pub fn policy(&self) -> &str {
        self.selector.name()
    }

    /// Indices of agents free at `now`, in book order
    pub fn free_agents(agents: &[Agent], now: Step) -> Vec<usize> {
        agents
            .iter()
            .enumerate()
            .filter(|(_, agent)| agent.is_free(now))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Compute and shuffle the free set for this step
    pub fn open_round(&self, agents: &[Agent], now: Step, rng: &mut StdRng) -> PairingRound {
        let mut order = Self::free_agents(agents, now);
        order.shuffle(rng);
        trace!("step {now}: {} free agent(s)", order.len());

        PairingRound {
            order,
            consumed: vec![false; agents.len()],
            cursor: 0,
        }
    }

    /// Next pair in shuffle order, or `None` when the round is exhausted
    ///
    /// Both agents are consumed and become busy until `now + T` whatever the
    /// outcome of their interaction. An agent with no available candidate is
    /// passed over for the rest of the step.
    pub fn next_pair(
        &mut self,
        round: &mut PairingRound,
        agents: &mut [Agent],
        clock: &StepClock,
        rng: &mut StdRng,
    ) -> Option<Pairing> {
        while round.cursor < round.order.len() {
            let idx = round.order[round.cursor];
            round.cursor += 1;

            if round.consumed[idx] {
                continue;
            }

            let pool: Vec<usize> = round
                .order
                .iter()
                .copied()
                .filter(|&other| other != idx && !round.consumed[other])
                .collect();
            if pool.is_empty() {
                trace!("{} has no candidate this step", agents[idx].id);
                continue;
            }

            let candidates: Vec<&Agent> = pool.iter().map(|&other| &agents[other]).collect();
            let choice = self.selector.select(&agents[idx], &candidates, rng);
            let Some(&partner) = choice.and_then(|c| pool.get(c)) else {
                trace!("{} declined to pick a partner", agents[idx].id);
                continue;
            };

            round.consumed[idx] = true;
            round.consumed[partner] = true;

            let busy_until = clock.busy_until();
            agents[idx].busy_until = busy_until;
            agents[partner].busy_until = busy_until;

            trace!(
                "paired {} with {} (busy until {busy_until})",
                agents[idx].id, agents[partner].id
            );
            return Some(Pairing {
                initiator: idx,
                partner,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::{AgentId, PriceTable, Stock};
    use agora_matching::UniformSelector;
    use agora_ports::Clock;
    use rand::SeedableRng;

    fn agents(n: usize) -> Vec<Agent> {
        (1..=n)
            .map(|i| {
                Agent::spawn(
                    AgentId::new(format!("a{i}")),
                    "a",
                    0,
                    &Stock::new(),
                    &Stock::new(),
                    &PriceTable::new(),
                    0,
                )
            })
            .collect()
    }

    fn drain(
        engine: &mut MatchingEngine,
        agents: &mut [Agent],
        clock: &StepClock,
        rng: &mut StdRng,
    ) -> Vec<Pairing> {
        let mut round = engine.open_round(agents, clock.now(), rng);
        let mut pairs = Vec::new();
        while let Some(pair) = engine.next_pair(&mut round, agents, clock, rng) {
            pairs.push(pair);
        }
        pairs
    }

    #[test]
    fn test_pairs_are_disjoint_and_cover_even_population() {
        let mut population = agents(6);
        let clock = StepClock::new(3);
        let mut engine = MatchingEngine::new(Box::new(UniformSelector::new()));
        assert_eq!(engine.policy(), "Uniform");
        let mut rng = StdRng::seed_from_u64(42);

        let pairs = drain(&mut engine, &mut population, &clock, &mut rng);

        assert_eq!(pairs.len(), 3);
        let mut seen = vec![false; 6];
        for pair in &pairs {
            assert_ne!(pair.initiator, pair.partner);
            for idx in [pair.initiator, pair.partner] {
                assert!(!seen[idx], "agent {idx} paired twice");
                seen[idx] = true;
            }
        }
    }

    #[test]
    fn test_odd_agent_out_stays_free() {
        let mut population = agents(3);
        let clock = StepClock::new(3);
        let mut engine = MatchingEngine::new(Box::new(UniformSelector::new()));
        let mut rng = StdRng::seed_from_u64(7);

        let mut round = engine.open_round(&population, clock.now(), &mut rng);
        assert_eq!(round.order().len(), 3);
        let pair = engine
            .next_pair(&mut round, &mut population, &clock, &mut rng)
            .unwrap();
        assert!(round.is_consumed(pair.initiator) && round.is_consumed(pair.partner));
        assert!(engine.next_pair(&mut round, &mut population, &clock, &mut rng).is_none());

        let odd = (0..3)
            .find(|&idx| idx != pair.initiator && idx != pair.partner)
            .unwrap();
        assert!(!round.is_consumed(odd));
        let busy = population.iter().filter(|a| !a.is_free(0)).count();
        assert_eq!(busy, 2);
    }

    #[test]
    fn test_busy_agents_not_selected_until_cooldown_elapses() {
        let mut population = agents(2);
        let mut clock = StepClock::new(3);
        let mut engine = MatchingEngine::new(Box::new(UniformSelector::new()));
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(drain(&mut engine, &mut population, &clock, &mut rng).len(), 1);
        assert!(population.iter().all(|a| a.busy_until == 3));

        for _ in 1..3 {
            clock.advance();
            assert!(drain(&mut engine, &mut population, &clock, &mut rng).is_empty());
        }

        clock.advance();
        assert_eq!(drain(&mut engine, &mut population, &clock, &mut rng).len(), 1);
    }

    #[test]
    fn test_lone_agent_is_skipped() {
        let mut population = agents(1);
        let clock = StepClock::new(3);
        let mut engine = MatchingEngine::new(Box::new(UniformSelector::new()));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(drain(&mut engine, &mut population, &clock, &mut rng).is_empty());
        assert!(population[0].is_free(0));
    }
}
