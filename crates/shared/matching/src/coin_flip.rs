use agora_core::Agent;
use agora_ports::PartnerSelector;
use rand::{Rng, RngCore};

use crate::{everyone, pick};

/// Coin flip between familiar and new faces
///
/// Heads (and the agent knows someone): choose among known candidates, or anyone if
/// none of them is available. Tails: choose among strangers, or anyone if every
/// candidate is already known.
#[derive(Debug, Default)]
pub struct CoinFlipSelector;

impl CoinFlipSelector {
    pub fn new() -> Self {
        Self
    }
}

impl PartnerSelector for CoinFlipSelector {
    fn name(&self) -> &str {
        "Coin Flip"
    }

    fn select(
        &mut self,
        agent: &Agent,
        candidates: &[&Agent],
        rng: &mut dyn RngCore,
    ) -> Option<usize> {
        let heads = rng.gen_bool(0.5);
        let want_known = heads && !agent.known.is_empty();

        let pool: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| agent.knows(&c.id) == want_known)
            .map(|(idx, _)| idx)
            .collect();

        if pool.is_empty() {
            pick(&everyone(candidates.len()), rng)
        } else {
            pick(&pool, rng)
        }
    }
}
