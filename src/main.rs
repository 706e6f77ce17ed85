//! pagesim - replays a memory access trace against a fixed pool of frames
//!
//! Usage: pagesim [OPTIONS] <num_frames> <page_size> <fifo|clock> <trace_file>

mod cli;

use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};

use cli::Cli;
use paging::{PagingEngine, SimulationConfig, TraceReader};
use pagesim_error::Result;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SimulationConfig::new(cli.num_frames, cli.page_size, &cli.policy)?;
    let mut trace = TraceReader::open(&cli.trace_file)?;

    info!(
        "{} frames, page size {}, policy {}, trace {}",
        config.num_frames,
        config.page_size,
        config.policy,
        cli.trace_file.display()
    );

    let mut engine = PagingEngine::new(&config);
    let mut out = BufWriter::new(io::stdout().lock());

    for record in trace.by_ref() {
        let result = engine.process_record(&record?);
        if !cli.quiet {
            writeln!(out, "{result}")?;
        }
    }

    if trace.skipped() > 0 {
        warn!("{} malformed trace lines skipped", trace.skipped());
    }

    writeln!(out, "{}", engine.summary())?;
    out.flush()?;
    Ok(())
}
