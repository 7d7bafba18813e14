// This file is part of WordGrid.
//
// WordGrid is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// WordGrid is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with WordGrid. If
// not, see <https://www.gnu.org/licenses/>.

mod report;

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, info, LevelFilter};

use wordgrid::{ingest, search, search_parallel, SearchOptions, DEFAULT_MIN_WORD_LENGTH};

/// Find dictionary words hidden in a word search grid.
#[derive(Parser, Debug)]
#[command(name = "findwords", version, about)]
struct Args {
    /// Comma-separated grid, one letter per field
    grid: PathBuf,

    /// Comma-separated list of words to look for
    words: PathBuf,

    /// Comma-separated list of words to leave out of the results
    #[arg(short, long)]
    ignore: Option<PathBuf>,

    /// Shortest word to report
    #[arg(short, long = "min-length", default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Search grid rows on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("Command line options: {:?}", args);

    let index = ingest::load_vocabulary(&args.words)
        .with_context(|| format!("Failed to load word list {}", args.words.display()))?;
    info!("Indexed {} words", index.len());

    let ignore = match &args.ignore {
        Some(path) => ingest::load_ignore_list(path)
            .with_context(|| format!("Failed to load ignore list {}", path.display()))?,
        None => HashSet::new(),
    };

    let grid = ingest::load_grid(&args.grid)
        .with_context(|| format!("Failed to load grid {}", args.grid.display()))?;
    debug!("Grid:\n{}", grid);

    let options = SearchOptions::new(args.min_length, ignore);
    let found = if args.parallel {
        search_parallel(&grid, &index, &options)
    } else {
        search(&grid, &index, &options)
    };

    report::write_report(&mut io::stdout().lock(), &found).context("Failed to write results")?;
    return Ok(());
}
