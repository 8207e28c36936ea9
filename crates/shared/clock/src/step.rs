use agora_core::Step;
use agora_ports::Clock;

/// Discrete simulation clock with a fixed interaction cooldown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepClock {
    now: Step,
    cooldown: Step,
}

impl StepClock {
    /// Create a clock at step 0 with cooldown `T`
    pub fn new(cooldown: Step) -> Self {
        Self { now: 0, cooldown }
    }

    pub fn cooldown(&self) -> Step {
        self.cooldown
    }

    /// Move to the next step
    pub fn advance(&mut self) -> Step {
        self.now += 1;
        self.now
    }

    /// First step at which an agent paired now is free again
    pub fn busy_until(&self) -> Step {
        self.now.saturating_add(self.cooldown)
    }

    pub fn is_free(&self, busy_until: Step) -> bool {
        self.now >= busy_until
    }

    /// Arrival step for a roster offset expressed in cooldown periods
    pub fn arrival_step(&self, offset: Step) -> Step {
        offset.saturating_mul(self.cooldown)
    }
}

impl Clock for StepClock {
    fn now(&self) -> Step {
        self.now
    }

    fn name(&self) -> &str {
        "StepClock"
    }
}
