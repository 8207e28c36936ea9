use std::path::PathBuf;

use abm::RunLimit;
use agora_clock::Pace;
use agora_runner::{DEFAULT_CONFIG, OutputFormat, RunOptions, load_config};
use clap::Parser;
use env_logger::Env;

#[derive(Parser, Debug)]
#[command(name = "agora")]
#[command(about = "Discrete-time barter and cash marketplace simulation")]
struct Args {
    /// Market configuration (.yaml, .yml or .json)
    #[arg(default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Number of steps to run; unbounded when omitted
    #[arg(short, long)]
    steps: Option<u64>,

    /// RNG seed, overriding the one in the config
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock milliseconds between steps (0 runs flat out)
    #[arg(long, default_value = "1000")]
    tick_ms: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let options = RunOptions {
        limit: RunLimit::from(args.steps),
        pace: Pace::from_millis(args.tick_ms),
        format: args.format,
    };

    match agora_runner::run(config, options) {
        Ok(metrics) => log::info!(
            "{} step(s): {} barter(s), {} direct sale(s), {} opportunistic purchase(s), {} no-trade(s)",
            metrics.steps,
            metrics.barters,
            metrics.direct_sales,
            metrics.opportunistic_purchases,
            metrics.no_trades
        ),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
