use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use batched_flow_solver::bnb;
use batched_flow_solver::cli::Cli;
use batched_flow_solver::io;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.volume <= 0 {
        anyhow::bail!("--volume must be positive, got {}", cli.volume);
    }

    let graph = io::read_graph(&cli.edges_file, &cli.nodes_file).context("reading input files")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let solution = bnb::solve(&graph, cli.volume, seed).context("solving")?;

    eprintln!("flow: {:?}", solution.flow);
    eprintln!("objective: {}", solution.objective);
    Ok(())
}
