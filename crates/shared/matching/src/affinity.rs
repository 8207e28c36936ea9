use agora_core::Agent;
use agora_ports::PartnerSelector;
use log::trace;
use rand::RngCore;

use crate::{everyone, pick};

/// Partner affinity
///
/// Prefers candidates the agent has met before and last saw offering a product the
/// agent still wants. Falls back to a uniform choice over all candidates.
#[derive(Debug, Default)]
pub struct AffinitySelector;

impl AffinitySelector {
    pub fn new() -> Self {
        Self
    }
}

impl PartnerSelector for AffinitySelector {
    fn name(&self) -> &str {
        "Affinity"
    }

    fn select(
        &mut self,
        agent: &Agent,
        candidates: &[&Agent],
        rng: &mut dyn RngCore,
    ) -> Option<usize> {
        let promising: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| {
                agent
                    .known
                    .get(&candidate.id)
                    .is_some_and(|seen| seen.offers_any_of(&agent.buys))
            })
            .map(|(idx, _)| idx)
            .collect();

        if !promising.is_empty() {
            trace!(
                "{} has {} promising known partner(s)",
                agent.id,
                promising.len()
            );
            return pick(&promising, rng);
        }

        pick(&everyone(candidates.len()), rng)
    }
}
