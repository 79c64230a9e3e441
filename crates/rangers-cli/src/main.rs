// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

mod printer;

use anyhow::{Context, Result};
use clap::Parser;
use printer::SolutionPrinter;
use rand::{SeedableRng, rngs::StdRng};
use rangers_model::scenario::Scenario;
use rangers_search::{
    bfs::BfsSolver,
    config::{BfsConfig, SearchMode},
    monitor::{
        composite::CompositeSearchMonitor,
        progress::{DEFAULT_PROGRESS_STEP, ProgressMonitor},
        solution_limit::SolutionLimitMonitor,
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rangers")]
#[command(about = "Breadth-first search for fair ranger rotas")]
struct Cli {
    /// Stop after the first solution
    #[arg(long)]
    first_only: bool,

    /// Do not enqueue configurations with this many moves
    #[arg(long)]
    max_depth: Option<usize>,

    /// Stop after this many solutions
    #[arg(long)]
    max_solutions: Option<u64>,

    /// Seed for the move-order randomness (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Expanded nodes between two progress events
    #[arg(
        long,
        default_value_t = DEFAULT_PROGRESS_STEP,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    progress_step: u64,

    /// Explore all four openings instead of forcing A-C
    #[arg(long)]
    no_symmetry_break: bool,

    /// Only print the summary
    #[arg(long, short)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn search_config(&self) -> BfsConfig {
        let mode = if self.first_only {
            SearchMode::FirstSolution
        } else {
            SearchMode::Exhaustive
        };
        BfsConfig {
            mode,
            max_depth: self.max_depth,
        }
    }

    fn scenario(&self) -> Scenario {
        if self.no_symmetry_break {
            Scenario::rangers().without_opening()
        } else {
            Scenario::rangers()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    let scenario = cli.scenario();
    let config = cli.search_config();
    tracing::info!(seed, %scenario, %config, "configured run");

    if config.max_depth.is_none()
        && !config.stops_at_first_solution()
        && cli.max_solutions.is_none()
    {
        tracing::warn!("exhaustive search without --max-depth never drains; interrupt to stop");
    }

    let mut printer = SolutionPrinter::new(std::io::stdout().lock(), cli.quiet);
    let mut solver = BfsSolver::with_config(config, StdRng::seed_from_u64(seed));

    let outcome = {
        let mut monitor = CompositeSearchMonitor::with_capacity(3);
        if let Some(limit) = cli.max_solutions {
            monitor.add_monitor(SolutionLimitMonitor::new(limit));
        }
        monitor.add_monitor(&mut printer);
        monitor.add_monitor(ProgressMonitor::new(cli.progress_step));
        solver.solve(&scenario, monitor)
    };

    if let Some(err) = printer.take_error() {
        return Err(err).context("failed to write solutions to stdout");
    }
    tracing::debug!(printed = printer.printed(), "solutions written");
    drop(printer);

    println!("{}", outcome);
    Ok(())
}
