//! Recording wrapper for evolution strategy runs, for testing and analysis.

use ndarray::Array1;

use crate::recorder::OptimizationRecorder;
use crate::{evolution_strategy, EsConfig, EsError, EsReport};

/// Run an evolution strategy with per-iteration recording to CSV.
///
/// Installs a recording callback into the configuration, runs the optimizer,
/// then writes one row per iteration (best x, best f, rho, improvement flag)
/// to `<output_dir>/<function_name>.csv`. Returns the report and the CSV
/// path.
pub fn run_recorded_evolution_strategy<F>(
    function_name: &str,
    func: F,
    bounds: &[(f64, f64)],
    max_evals: Option<usize>,
    max_iters: Option<usize>,
    mut config: EsConfig,
    output_dir: &str,
) -> Result<(EsReport, String), EsError>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let recorder = OptimizationRecorder::new(function_name.to_string());
    config.callback = Some(recorder.create_callback());

    let report = evolution_strategy(func, bounds, max_evals, max_iters, config)?;

    let csv_path = recorder.save_to_csv(output_dir)?;
    Ok((report, csv_path))
}
