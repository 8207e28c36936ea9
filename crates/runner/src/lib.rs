//! Agora Runner - command-line shell around the marketplace engine
//!
//! - **Config**: YAML / JSON input documents into [`abm::MarketConfig`]
//! - **Reporters**: console text and JSON lines, both with optional pacing
//! - **Runner**: builds the market and drives it to completion
//!
//! ## Architecture
//!
//! ```text
//!   input.yaml ──▶ load_config ──▶ Marketplace::new ──▶ run(limit)
//!                                                        │ StepReport
//!                                                        ▼
//!                                         ConsoleReporter / JsonReporter
//! ```

pub mod config;
pub mod error;
pub mod reporter;

pub use config::{DEFAULT_CONFIG, from_json_str, from_yaml_str, load_config};
pub use error::{Result, RunnerError};
pub use reporter::{ConsoleReporter, JsonReporter, OutputFormat, summary_line};

use abm::{MarketConfig, MarketMetrics, Marketplace, RunLimit};
use agora_clock::Pace;

/// How to drive a loaded configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub limit: RunLimit,
    pub pace: Pace,
    pub format: OutputFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            limit: RunLimit::Unbounded,
            pace: Pace::from_millis(1000),
            format: OutputFormat::Text,
        }
    }
}

/// Build the market and run it to stdout
pub fn run(config: MarketConfig, options: RunOptions) -> Result<MarketMetrics> {
    let mut market = Marketplace::new(config)?;
    log::info!(
        "market built: {} agent(s) scheduled, policy {:?}",
        market.pending_arrivals(),
        market.policy()
    );

    let metrics = match options.format {
        OutputFormat::Text => {
            let mut reporter = ConsoleReporter::stdout(options.pace);
            let metrics = market.run(options.limit, &mut reporter);
            reporter.finish().map_err(RunnerError::Output)?;
            metrics
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::stdout(options.pace);
            let metrics = market.run(options.limit, &mut reporter);
            reporter.finish().map_err(RunnerError::Output)?;
            metrics
        }
    };

    Ok(metrics)
}
