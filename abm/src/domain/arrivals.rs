//! Arrival scheduling
//!
//! Turns the declarative roster into a queue of spawn records ordered by entry step.

use std::collections::VecDeque;

use agora_clock::StepClock;
use agora_core::{Cash, ConfigResult, PriceTable, RosterEntry, Step, Stock};

/// One agent waiting to enter the market
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSpawn {
    pub kind: String,
    /// Absolute entry step (`roster offset * T`)
    pub enters: Step,
    pub cash: Cash,
    pub sells: Stock,
    pub buys: Stock,
}

/// Queue of pending spawns, ascending by `enters`, FIFO among equal steps
#[derive(Debug, Clone, Default)]
pub struct ArrivalScheduler {
    pending: VecDeque<PendingSpawn>,
}

impl ArrivalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand every roster entry into `count` spawn records
    ///
    /// Fails on the first malformed entry, before anything is scheduled.
    pub fn from_roster(
        roster: &[RosterEntry],
        clock: &StepClock,
        default_cash: Cash,
        prices: &PriceTable,
    ) -> ConfigResult<Self> {
        let mut scheduler = Self::new();

        for (index, entry) in roster.iter().enumerate() {
            let kind = entry.validate(index, prices)?;
            let enters = clock.arrival_step(entry.enters);

            for _ in 0..entry.count {
                scheduler.schedule(PendingSpawn {
                    kind: kind.to_string(),
                    enters,
                    cash: entry.cash.unwrap_or(default_cash),
                    sells: entry.sells.clone(),
                    buys: entry.buys.clone(),
                });
            }
        }

        Ok(scheduler)
    }

    /// Add a record behind every record entering at the same step or earlier
    pub fn schedule(&mut self, spawn: PendingSpawn) {
        let at = self.pending.partition_point(|p| p.enters <= spawn.enters);
        self.pending.insert(at, spawn);
    }

    /// Remove and return every record due at `step`, in queue order
    ///
    /// The scheduler is polled once per step from step 0, so nothing is ever
    /// overdue; a record left behind by a skipped poll is released here too.
    pub fn pop_due(&mut self, step: Step) -> Vec<PendingSpawn> {
        let due = self.pending.partition_point(|p| p.enters <= step);
        self.pending.drain(..due).collect()
    }

    /// Entry step of the next pending record
    pub fn next_due(&self) -> Option<Step> {
        self.pending.front().map(|p| p.enters)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
