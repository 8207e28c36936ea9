use agora_core::Agent;
use rand::RngCore;

/// Port for partner selection policies
///
/// Different implementations support various pairing strategies:
/// - Affinity (known partners who can satisfy a want)
/// - Coin flip between known and unknown partners
/// - Uniform random
pub trait PartnerSelector: Send {
    /// Pick a partner for `agent` among `candidates` (never empty, never `agent`)
    ///
    /// Returns an index into `candidates`, or `None` to leave the agent unpaired.
    fn select(
        &mut self,
        agent: &Agent,
        candidates: &[&Agent],
        rng: &mut dyn RngCore,
    ) -> Option<usize>;

    /// Get the name of the policy
    fn name(&self) -> &str;
}
