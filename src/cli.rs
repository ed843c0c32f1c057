//! Command-line surface, grounded on the derive-based `clap` CLI the wider
//! example pack uses (e.g. `gat-cli`'s `Cli`/`Parser` struct).

use std::path::PathBuf;

use clap::Parser;

/// Solve a batched minimum-cost network flow problem.
#[derive(Debug, Parser)]
#[command(name = "solver", version, about)]
pub struct Cli {
    /// Arc records: first line an edge count, then `from to cost limit` per line.
    pub edges_file: PathBuf,

    /// Node production records: first line a record count, then `vertex production` per line.
    pub nodes_file: PathBuf,

    /// Batch size: flow on every arc is rounded up to a multiple of this before costing.
    #[arg(long, default_value_t = 1)]
    pub volume: i64,

    /// Seed for the dual pivot's randomized tie-break. Omit to seed from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Raise log verbosity: unset is warnings only, `-v` is info, `-vv` is debug.
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The `tracing` level this invocation's `-v` flags select, used as the
    /// fallback when `RUST_LOG` isn't set.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
