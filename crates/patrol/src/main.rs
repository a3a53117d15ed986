//! Command-line entry point: load a map and print one answer.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use patrol::prelude::*;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "patrol",
    version,
    about = "Trace a patrolling agent across a grid map"
)]
struct Cli {
    /// Map file to load.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Count obstructions that trap the agent instead of visited cells.
    #[arg(short = 'p', long = "part2")]
    part2: bool,

    /// Worker threads for the obstruction search (default: all cores).
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// How each search worker builds its obstructed grid.
    #[arg(long, value_enum, default_value_t = StrategyArg::Overlay)]
    strategy: StrategyArg,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Single-cell overlay on the shared grid.
    Overlay,
    /// Full grid copy per candidate.
    Clone,
}

impl From<StrategyArg> for GridStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Overlay => GridStrategy::Overlay,
            StrategyArg::Clone => GridStrategy::Clone,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    info!(input = %cli.input.display(), "reading map");
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("read {}", cli.input.display()))?;
    let scenario: Scenario = text
        .parse()
        .with_context(|| format!("parse {}", cli.input.display()))?;

    println!("{}", answer(&cli, &scenario)?);
    Ok(())
}

fn answer(cli: &Cli, scenario: &Scenario) -> Result<usize> {
    if cli.part2 {
        let search = ObstructionSearch::new(SearchConfig {
            worker_count: cli.workers,
            strategy: cli.strategy.into(),
        });
        let report = search
            .run(&scenario.grid, scenario.start)
            .context("obstruction search")?;
        Ok(report.count())
    } else {
        patrol::count_distinct_visited_positions(&scenario.grid, scenario.start)
            .context("agent is unable to leave the map")
    }
}
