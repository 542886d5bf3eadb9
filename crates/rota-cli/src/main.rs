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

//! Rota CLI.
//!
//! Loads a JSON input document (pickees, pickers, timeslots), enumerates
//! every complete day assignment in which no pickee is claimed twice in the
//! same timeslot, and prints the valid days followed by run statistics.

use anyhow::{bail, Context, Result};
use clap::Parser;
use rota_model::loading::ProblemLoader;
use rota_solver::{DEFAULT_MAX_COMBINATIONS, SolverBuilder};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rota")]
#[command(version)]
#[command(about = "Enumerates conflict-free day assignments for pickers, picks and timeslots")]
struct Cli {
    /// Path to the input document (JSON with pickees, pickers and timeslots)
    path: PathBuf,

    /// Stop after this many valid days
    #[arg(long)]
    day_limit: Option<u64>,

    /// Wall-clock budget in seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Worker threads for the enumeration (1 = sequential)
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Ceiling on the projected combination count
    #[arg(long, default_value_t = DEFAULT_MAX_COMBINATIONS)]
    max_combinations: u64,

    /// Disable the combination-count ceiling
    #[arg(long)]
    no_ceiling: bool,

    /// Print only the day count and statistics, not every day
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if !cli.path.exists() {
        bail!("could not find provided data file: {}", cli.path.display());
    }

    let problem = ProblemLoader::new()
        .from_path(&cli.path)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;

    tracing::info!(%problem, "loaded instance");

    let mut builder = SolverBuilder::new()
        .with_threads(cli.threads)
        .with_max_combinations(cli.max_combinations);
    if cli.no_ceiling {
        builder = builder.without_combination_ceiling();
    }
    if let Some(limit) = cli.day_limit {
        builder = builder.with_day_limit(limit);
    }
    if let Some(secs) = cli.time_limit {
        builder = builder.with_time_limit(Duration::from_secs(secs));
    }

    let outcome = builder.build().solve(&problem)?;

    if !cli.summary {
        for (i, day) in outcome.days().iter().enumerate() {
            println!("Day {}", i + 1);
            println!("{}", day.render(&problem));
        }
    }

    println!(
        "Found {} valid day assignments ({})",
        outcome.num_days(),
        outcome.reason()
    );
    print!("{}", outcome.statistics());

    Ok(())
}
