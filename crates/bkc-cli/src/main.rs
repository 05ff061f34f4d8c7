mod cli;
mod util;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, RunType};

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder().with_max_level(cli.log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if !util::validate_bounds_pair(cli.lower, cli.upper) {
        error!("--lower and --upper must be supplied together");
        std::process::exit(1);
    }

    let threads = util::configure_threads(&cli.threads);
    info!("balanced clustering: {} clusters, type={:?}, threads={}", cli.clusters, cli.run_type, threads);

    let assignment_path = cli
        .assignment
        .clone()
        .unwrap_or_else(|| util::default_output_path(&cli.input, "assignment"));
    let centers_path = cli
        .centers
        .clone()
        .unwrap_or_else(|| util::default_output_path(&cli.input, "centers"));

    for run_idx in 0..cli.runs {
        let seed = cli.seed.wrapping_add(run_idx);
        let result = run_once(&cli, threads, seed, &assignment_path, &centers_path);
        match result {
            Ok(sse) => info!(run = run_idx + 1, sse, "run complete"),
            Err(e) => error!(run = run_idx + 1, "run failed: {e:?}"),
        }
    }
}

fn run_once(cli: &Cli, threads: usize, seed: u64, assignment_path: &str, centers_path: &str) -> Result<f64> {
    let points = bkc_io::read_points(&cli.input).with_context(|| format!("reading {}", cli.input))?;
    let warm_start = !cli.no_warm_start;
    let init = bkc_core::InitMethod::from(cli.init);
    let started = Instant::now();

    let outcome = match cli.run_type {
        RunType::Hard => match (cli.lower, cli.upper) {
            (Some(l), Some(u)) => {
                bkc_core::cluster_hard_bounded(&points, cli.clusters, l, u, init, warm_start, threads, seed)
            }
            _ => bkc_core::cluster_hard(&points, cli.clusters, init, warm_start, threads, seed),
        },
        RunType::Soft => {
            let lambda = cli.lambda;
            let f = move |_j: usize, x: usize| lambda * (x as f64).powi(2);
            bkc_core::cluster_soft(&points, cli.clusters, f, init, warm_start, threads, seed)
        }
        RunType::Lasso => bkc_core::cluster_lasso(&points, cli.clusters, cli.lambda, init, seed),
    }
    .context("clustering failed")?;

    let elapsed = started.elapsed().as_secs_f64();

    bkc_io::write_assignments(assignment_path, &outcome.assignments)
        .with_context(|| format!("writing {assignment_path}"))?;
    bkc_io::write_centers(centers_path, &outcome.centers)
        .with_context(|| format!("writing {centers_path}"))?;

    let run_type_str = match cli.run_type {
        RunType::Hard => "hard",
        RunType::Soft => "soft",
        RunType::Lasso => "lasso",
    };
    let init_str = match cli.init {
        cli::InitArg::Forgy => "forgy",
        cli::InitArg::Rp => "rp",
    };
    let record = bkc_io::SummaryRecord {
        run_type: run_type_str,
        file: &cli.input,
        k: cli.clusters,
        init: init_str,
        warm_start,
        threads,
        seed,
        lambda: cli.lambda,
        sse: outcome.sse,
        elapsed_seconds: elapsed,
    };
    bkc_io::append_summary(&cli.summary, &record).with_context(|| format!("appending to {}", cli.summary))?;

    Ok(outcome.sse)
}
