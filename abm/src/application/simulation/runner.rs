//! Marketplace
//!
//! The step loop: admit arrivals, pair free agents, negotiate each pair, adapt
//! quotes, advance the clock.

use std::ops::ControlFlow;

use agora_clock::StepClock;
use agora_core::{
    Agent, AgentId, Cash, ConfigResult, MarketPolicy, MarketSnapshot, PriceTable, Step, StepReport,
};
use agora_matching::create_partner_selector;
use agora_ports::{Clock, MarketReporter};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::{AgentBook, MarketConfig, MarketMetrics};
use crate::application::matching::MatchingEngine;
use crate::application::negotiation::TradeNegotiator;
use crate::domain::{ArrivalScheduler, PriceAdapter};

/// How long [`Marketplace::run`] goes on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLimit {
    Steps(Step),
    /// Until the reporter breaks
    Unbounded,
}

impl RunLimit {
    pub fn steps(&self) -> Option<Step> {
        match self {
            RunLimit::Steps(n) => Some(*n),
            RunLimit::Unbounded => None,
        }
    }
}

impl From<Option<Step>> for RunLimit {
    fn from(steps: Option<Step>) -> Self {
        steps.map_or(RunLimit::Unbounded, RunLimit::Steps)
    }
}

/// The simulation context: owns every agent and all market state
pub struct Marketplace {
    policy: MarketPolicy,
    prices: PriceTable,
    clock: StepClock,
    arrivals: ArrivalScheduler,
    book: AgentBook,
    matching: MatchingEngine,
    negotiator: TradeNegotiator,
    adapter: PriceAdapter,
    rng: StdRng,
    metrics: MarketMetrics,
}

impl Marketplace {
    /// Validate the configuration and build an empty market at step 0
    pub fn new(config: MarketConfig) -> ConfigResult<Self> {
        config.validate()?;

        let clock = StepClock::new(config.cooldown);
        let arrivals =
            ArrivalScheduler::from_roster(&config.agents, &clock, config.cash, &config.prices)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let policy = config.policy;
        let matching = MatchingEngine::new(create_partner_selector(policy.partner_selection));
        let negotiator = TradeNegotiator::new(&policy);
        let adapter = PriceAdapter::new(policy.price_adaptation);
        debug!(
            "market ready: {} pending arrival(s), T={}, partners {}, barter {}, scorer {}, adaptation {:?}",
            arrivals.len(),
            config.cooldown,
            matching.policy(),
            negotiator.barter_enabled(),
            negotiator.scorer().unwrap_or("none"),
            adapter.trigger()
        );

        Ok(Self {
            policy,
            prices: config.prices,
            clock,
            arrivals,
            book: AgentBook::new(),
            matching,
            negotiator,
            adapter,
            rng,
            metrics: MarketMetrics::default(),
        })
    }

    /// Run one full step and return what happened
    pub fn tick(&mut self) -> StepReport {
        let now = self.clock.now();
        let entered = self.admit_arrivals(now);

        let mut round = self.matching.open_round(self.book.agents(), now, &mut self.rng);
        let mut interactions = Vec::new();

        while let Some(pair) =
            self.matching
                .next_pair(&mut round, self.book.agents_mut(), &self.clock, &mut self.rng)
        {
            let (initiator, partner) = self.book.pair_mut(pair.initiator, pair.partner);
            let interaction = self.negotiator.negotiate(initiator, partner, now);
            if self.adapter.after_interaction(&interaction, initiator, partner) {
                debug!("step {now}: quotes of {} and {} adapted", initiator.id, partner.id);
            }

            debug!("step {now}: {interaction}");
            self.metrics.record(&interaction);
            interactions.push(interaction);
        }

        let snapshot = self.book.snapshot(now);
        self.metrics.steps += 1;
        self.clock.advance();

        StepReport {
            step: now,
            entered,
            interactions,
            snapshot,
        }
    }

    /// Run until `limit` is reached or the reporter breaks
    pub fn run(&mut self, limit: RunLimit, reporter: &mut dyn MarketReporter) -> MarketMetrics {
        match limit {
            RunLimit::Steps(n) => info!("running for {n} steps (T={})", self.clock.cooldown()),
            RunLimit::Unbounded => info!("running unbounded (T={})", self.clock.cooldown()),
        }
        reporter.on_start(limit.steps(), self.clock.cooldown());

        let mut executed: Step = 0;
        loop {
            if limit.steps().is_some_and(|n| executed >= n) {
                break;
            }

            let report = self.tick();
            executed += 1;

            if reporter.on_step(&report).is_break() {
                info!("run stopped by reporter after {executed} step(s)");
                break;
            }
        }

        info!(
            "run finished at step {}: {} trade(s) in {} pairing(s)",
            self.clock.now(),
            self.metrics.trades(),
            self.metrics.pairings
        );
        reporter.on_finish(&self.snapshot());
        self.metrics.clone()
    }

    /// Spawn every agent due at `now`, in roster order
    fn admit_arrivals(&mut self, now: Step) -> Vec<AgentId> {
        let due = self.arrivals.pop_due(now);
        let mut entered = Vec::with_capacity(due.len());

        for spawn in due {
            let id = self.book.next_id(&spawn.kind);
            let agent = Agent::spawn(
                id.clone(),
                spawn.kind,
                spawn.cash,
                &spawn.sells,
                &spawn.buys,
                &self.prices,
                now,
            );
            info!("Agent {id} entered at step {now}");

            self.book.push(agent);
            self.metrics.arrivals += 1;
            entered.push(id);
        }

        entered
    }

    /// Current state; the step is the next one to run
    pub fn snapshot(&self) -> MarketSnapshot {
        self.book.snapshot(self.clock.now())
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.book.get(id)
    }

    /// In order of entry
    pub fn agents(&self) -> &[Agent] {
        self.book.agents()
    }

    pub fn metrics(&self) -> &MarketMetrics {
        &self.metrics
    }

    /// Next step to run
    pub fn now(&self) -> Step {
        self.clock.now()
    }

    pub fn cooldown(&self) -> Step {
        self.clock.cooldown()
    }

    pub fn policy(&self) -> &MarketPolicy {
        &self.policy
    }

    pub fn pending_arrivals(&self) -> usize {
        self.arrivals.len()
    }

    pub fn total_cash(&self) -> Cash {
        self.book.agents().iter().map(|a| a.cash).sum()
    }
}

/// Stops after a fixed number of steps; used to bound otherwise unbounded runs
#[derive(Debug, Clone, Copy)]
pub struct StepBudget {
    remaining: Step,
}

impl StepBudget {
    pub fn new(steps: Step) -> Self {
        Self { remaining: steps }
    }
}

impl MarketReporter for StepBudget {
    fn on_step(&mut self, _report: &StepReport) -> ControlFlow<()> {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
