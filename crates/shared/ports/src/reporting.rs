use std::ops::ControlFlow;

use agora_core::{MarketSnapshot, Step, StepReport};

/// Port for whatever consumes the simulation's output
///
/// The core hands over structured values only; formatting, pacing and
/// stopping an unbounded run are the reporter's business.
pub trait MarketReporter {
    /// Called once before the first step. `steps` is `None` for an unbounded run.
    fn on_start(&mut self, _steps: Option<Step>, _cooldown: Step) {}

    /// Called after every step. Returning `Break` ends the run.
    fn on_step(&mut self, report: &StepReport) -> ControlFlow<()>;

    /// Called once when the run ends, with the final state
    fn on_finish(&mut self, _snapshot: &MarketSnapshot) {}
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl MarketReporter for NullReporter {
    fn on_step(&mut self, _report: &StepReport) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
