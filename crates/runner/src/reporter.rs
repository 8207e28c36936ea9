//! Reporters: turn step reports into console text or JSON lines

use std::io::{self, Write};
use std::ops::ControlFlow;

use agora_clock::{Pace, Pacer};
use agora_core::{AgentSnapshot, MarketSnapshot, Step, StepReport};
use agora_ports::MarketReporter;
use log::warn;

/// Output format selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One summary line: `seller1 has 120 cash; buys 1 salt; sells 2 bread; has 3 bread`
pub fn summary_line(agent: &AgentSnapshot) -> String {
    let mut parts = vec![format!("{} has {} cash", agent.id, agent.cash)];
    parts.extend(agent.buys.iter().map(|(p, q)| format!("buys {q} {p}")));
    parts.extend(agent.sold().into_iter().map(|(p, q)| format!("sells {q} {p}")));
    parts.extend(agent.holdings().into_iter().map(|(p, q)| format!("has {q} {p}")));
    parts.join("; ")
}

/// Human-readable step log with optional wall-clock pacing
pub struct ConsoleReporter<W: Write> {
    out: W,
    pacer: Pacer,
    finite: bool,
    error: Option<io::Error>,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(pace: Pace) -> Self {
        Self::new(io::stdout(), pace)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, pace: Pace) -> Self {
        Self {
            out,
            pacer: Pacer::new(pace),
            finite: true,
            error: None,
        }
    }

    /// First write failure, if any; the run is stopped when one occurs
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn write_start(&mut self, steps: Option<Step>, cooldown: Step) -> io::Result<()> {
        match steps {
            Some(n) => writeln!(self.out, "Running for {n} steps (T={cooldown})"),
            None => writeln!(self.out, "Running infinite simulation (T={cooldown})"),
        }
    }

    fn write_step(&mut self, report: &StepReport) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "-- Step {} --", report.step)?;
        for id in &report.entered {
            writeln!(self.out, "Agent {id} entered at step {}.", report.step)?;
        }
        for interaction in &report.interactions {
            writeln!(self.out, "{interaction}")?;
        }
        self.write_summary(&format!("step {}", report.step), &report.snapshot)
    }

    fn write_summary(&mut self, label: &str, snapshot: &MarketSnapshot) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "-- State after {label} --")?;

        let mut agents: Vec<&AgentSnapshot> = snapshot.agents.iter().collect();
        agents.sort_by(|a, b| a.id.cmp(&b.id));
        for agent in agents {
            writeln!(self.out, "{}", summary_line(agent))?;
        }
        self.out.flush()
    }

    fn track(&mut self, result: io::Result<()>) -> ControlFlow<()> {
        match result {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                warn!("console output failed: {err}");
                if self.error.is_none() {
                    self.error = Some(err);
                }
                ControlFlow::Break(())
            }
        }
    }
}

impl<W: Write> MarketReporter for ConsoleReporter<W> {
    fn on_start(&mut self, steps: Option<Step>, cooldown: Step) {
        self.finite = steps.is_some();
        let result = self.write_start(steps, cooldown);
        let _ = self.track(result);
    }

    fn on_step(&mut self, report: &StepReport) -> ControlFlow<()> {
        if self.error.is_some() {
            return ControlFlow::Break(());
        }
        self.pacer.wait();
        let result = self.write_step(report);
        self.track(result)
    }

    fn on_finish(&mut self, snapshot: &MarketSnapshot) {
        if self.finite && self.error.is_none() {
            let result = self.write_summary("end", snapshot);
            let _ = self.track(result);
        }
    }
}

/// One JSON document per step report, newline separated
pub struct JsonReporter<W: Write> {
    out: W,
    pacer: Pacer,
    error: Option<io::Error>,
}

impl JsonReporter<io::Stdout> {
    pub fn stdout(pace: Pace) -> Self {
        Self::new(io::stdout(), pace)
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W, pace: Pace) -> Self {
        Self {
            out,
            pacer: Pacer::new(pace),
            error: None,
        }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn write_report(&mut self, report: &StepReport) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> MarketReporter for JsonReporter<W> {
    fn on_step(&mut self, report: &StepReport) -> ControlFlow<()> {
        self.pacer.wait();
        match self.write_report(report) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                warn!("JSON output failed: {err}");
                self.error = Some(err);
                ControlFlow::Break(())
            }
        }
    }
}
