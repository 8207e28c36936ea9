//! Agent Book: owns every agent in the market, in order of entry

use std::collections::HashMap;

use agora_core::{Agent, AgentId, MarketSnapshot, Step};

#[derive(Debug, Clone, Default)]
pub struct AgentBook {
    agents: Vec<Agent>,
    index: HashMap<AgentId, usize>,
}

impl AgentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for the next agent of `kind`: the type followed by the market
    /// population after it enters (`seller3`). A `-n` suffix resolves the rare
    /// clash between types that end in digits.
    pub fn next_id(&self, kind: &str) -> AgentId {
        let base = format!("{kind}{}", self.agents.len() + 1);
        let mut id = AgentId::new(base.clone());
        let mut n = 2;
        while self.contains(&id) {
            id = AgentId::new(format!("{base}-{n}"));
            n += 1;
        }
        id
    }

    /// # Panics
    /// If an agent with the same id is already present.
    pub fn push(&mut self, agent: Agent) -> usize {
        let idx = self.agents.len();
        let previous = self.index.insert(agent.id.clone(), idx);
        assert!(previous.is_none(), "duplicate agent id {}", agent.id);
        self.agents.push(agent);
        idx
    }

    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.index
            .get(&AgentId::new(id))
            .map(|&idx| &self.agents[idx])
    }

    pub fn contains(&self, id: &AgentId) -> bool {
        self.index.contains_key(id)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Borrow two distinct agents mutably at once
    ///
    /// # Panics
    /// If `a == b` or either index is out of range.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Agent, &mut Agent) {
        assert_ne!(a, b, "an agent cannot trade with itself");
        if a < b {
            let (left, right) = self.agents.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.agents.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn snapshot(&self, step: Step) -> MarketSnapshot {
        MarketSnapshot {
            step,
            agents: self.agents.iter().map(Agent::snapshot).collect(),
        }
    }
}
