//! src/main.rs
//!
//! CLI: leest een graaf in het edge-list formaat, zoekt met de sampler naar een
//! grote onafhankelijke set en print de set plus zijn grootte op `stdout`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mis_sampler::{logging, pool, sample, Error, Graph, Params, Vertex};
use tracing::error;

/// Benadert een maximum onafhankelijke set door willekeurige maximale sets te samplen.
#[derive(Debug, Parser)]
#[command(name = "mis-sampler", version)]
struct Cli {
    /// Graafbestand: per regel `v` (knoop) of `u v` (kant).
    graph: PathBuf,

    /// Aantal trials.
    #[arg(short = 'n', long, default_value_t = Params::default().trials)]
    trials: usize,

    /// Aantal parallelle workers.
    #[arg(short, long, default_value_t = Params::default().workers)]
    workers: usize,

    /// Vaste seed; zonder seed gebruikt elke worker OS-entropie.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Draai de trials sequentieel in plaats van met de worker pool.
    #[arg(long)]
    sequential: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Core(#[from] Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn run(cli: Cli) -> Result<(), CliError> {
    let file = File::open(&cli.graph).map_err(|source| CliError::Open {
        path: cli.graph.clone(),
        source,
    })?;
    let graph = Graph::parse_edge_list(file).map_err(Error::from)?;

    let params = Params::new(cli.trials, cli.workers, cli.seed);
    let (vertices, size) = best_set(&graph, &params, cli.sequential)?;

    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(out, "mis: {vertices:?}")?;
    writeln!(out, "size: {size}")?;
    out.flush()?;
    Ok(())
}

/// Draait de gekozen sampler en geeft de gesorteerde set plus zijn grootte.
fn best_set(
    graph: &Graph,
    params: &Params,
    sequential: bool,
) -> mis_sampler::Result<(Vec<Vertex>, usize)> {
    let best = if sequential {
        sample::sample_with_params(graph, params)?
    } else {
        pool::sample_parallel_with_params(graph, params)?
    };
    let size = best.size();
    let mut vertices = best.into_vertices();
    vertices.sort_unstable();
    Ok((vertices, size))
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = run(Cli::parse()) {
        error!(error = %err, "command execution failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
