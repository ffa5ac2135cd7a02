//! Batch runner: a grid of algorithms x benchmark functions x repeated runs,
//! with results exported as log lines, CSV or JSON.
//!
//! Repeated runs are independent (own seed, own task) and execute in
//! parallel; a single run is always sequential.

use std::error::Error;
use std::fs::{create_dir_all, File};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use evostrat_es::{
    default_bounds, evolution_strategy, lookup_function, EsConfigBuilder, EsError, Objective,
    Strategy,
};

/// CLI arguments for the evostrat batch runner.
#[derive(Parser, Debug, Clone)]
#[command(author, about, long_about = None)]
struct Args {
    /// Comma-separated algorithm names, e.g. "(1+1),(mu+lambda)"
    #[arg(long, default_value = "(1+1)", value_delimiter = ',')]
    algos: Vec<String>,

    /// Comma-separated benchmark function names, e.g. "sphere,rastrigin"
    #[arg(long, default_value = "sphere", value_delimiter = ',')]
    functions: Vec<String>,

    /// Problem dimension
    #[arg(short, long, default_value_t = 10)]
    dim: usize,

    /// Number of repeated independent runs per (algorithm, function) pair
    #[arg(long, default_value_t = 10)]
    runs: usize,

    /// Evaluation budget per run
    #[arg(long, default_value_t = 10_000)]
    max_evals: usize,

    /// Optional iteration budget per run
    #[arg(long)]
    max_iters: Option<usize>,

    /// Parent population size (required for (mu+lambda) and (mu,lambda))
    #[arg(long)]
    mu: Option<usize>,

    /// Offspring per generation
    #[arg(long, default_value_t = 45)]
    lam: usize,

    /// Step-size adaptation window for the 1/5 success rule
    #[arg(long, default_value_t = 10)]
    k: usize,

    /// Step-size expansion factor
    #[arg(long, default_value_t = 1.1)]
    c_a: f64,

    /// Step-size contraction factor
    #[arg(long, default_value_t = 0.5)]
    c_r: f64,

    /// Base random seed; run r uses seed + r
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Export mode: log, csv or json
    #[arg(long, default_value = "log")]
    export: String,

    /// Output directory for csv/json exports
    #[arg(short, long, default_value = "./data_generated")]
    out: PathBuf,

    /// Print per-iteration progress
    #[arg(long, default_value_t = false)]
    disp: bool,
}

/// One row of the aggregated results.
#[derive(Debug, Clone, Serialize)]
struct RunSummary {
    algo: String,
    function: String,
    run: usize,
    seed: u64,
    best_f: f64,
    nfev: usize,
    nit: usize,
}

fn run_cell(
    args: &Args,
    strategy: Strategy,
    function_name: &str,
    func: Objective,
) -> Result<Vec<RunSummary>, EsError> {
    let bounds = default_bounds(function_name, args.dim);

    (0..args.runs)
        .into_par_iter()
        .map(|r| {
            let seed = args.seed + r as u64;
            let mut builder = EsConfigBuilder::new()
                .strategy(strategy)
                .lam(args.lam)
                .k(args.k)
                .c_a(args.c_a)
                .c_r(args.c_r)
                .seed(seed)
                .disp(args.disp);
            if let Some(mu) = args.mu {
                builder = builder.mu(mu);
            }

            let report = evolution_strategy(
                func,
                &bounds,
                Some(args.max_evals),
                args.max_iters,
                builder.build(),
            )?;
            Ok(RunSummary {
                algo: strategy.to_string(),
                function: function_name.to_string(),
                run: r,
                seed,
                best_f: report.fun,
                nfev: report.nfev,
                nit: report.nit,
            })
        })
        .collect()
}

fn export_log(summaries: &[RunSummary]) {
    for s in summaries {
        println!(
            "{:16} {:16} run {:3} seed {:6}  best_f={:.6e}  nfev={}  nit={}",
            s.algo, s.function, s.run, s.seed, s.best_f, s.nfev, s.nit
        );
    }
}

fn export_csv(summaries: &[RunSummary], out: &PathBuf) -> Result<PathBuf, Box<dyn Error>> {
    create_dir_all(out)?;
    let path = out.join("results.csv");
    let mut writer = csv::Writer::from_path(&path)?;
    for s in summaries {
        writer.serialize(s)?;
    }
    writer.flush()?;
    Ok(path)
}

fn export_json(summaries: &[RunSummary], out: &PathBuf) -> Result<PathBuf, Box<dyn Error>> {
    create_dir_all(out)?;
    let path = out.join("results.json");
    let file = File::create(&path)?;
    serde_json::to_writer_pretty(file, summaries)?;
    Ok(path)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Resolve every name up front so a typo fails before any run starts
    let mut grid: Vec<(Strategy, String, Objective)> = Vec::new();
    for algo in &args.algos {
        let strategy = Strategy::from_str(algo)?;
        for function_name in &args.functions {
            let func = lookup_function(function_name)?;
            grid.push((strategy, function_name.clone(), func));
        }
    }

    let mut summaries = Vec::new();
    for (strategy, function_name, func) in &grid {
        let cell = run_cell(&args, *strategy, function_name, *func)?;

        let best = cell.iter().map(|s| s.best_f).fold(f64::INFINITY, f64::min);
        let mean = cell.iter().map(|s| s.best_f).sum::<f64>() / cell.len().max(1) as f64;
        eprintln!(
            "{} on {} (D={}, {} runs): best={:.6e} mean={:.6e}",
            strategy, function_name, args.dim, args.runs, best, mean
        );
        summaries.extend(cell);
    }

    match args.export.as_str() {
        "log" => export_log(&summaries),
        "csv" => {
            let path = export_csv(&summaries, &args.out)?;
            eprintln!("results written to {}", path.display());
        }
        "json" => {
            let path = export_json(&summaries, &args.out)?;
            eprintln!("results written to {}", path.display());
        }
        other => {
            return Err(Box::new(EsError::InvalidParameter {
                name: "export",
                reason: format!("expected log, csv or json, got {}", other),
            }));
        }
    }

    Ok(())
}
