use ndarray::Array1;

use crate::task::BoundedTask;
use crate::{EsConfig, EsError, EsReport, EvolutionStrategy};

/// Convenience entry point (simplified):
/// - `func`: objective function mapping x -> f(x)
/// - `bounds`: vector of (lower, upper) pairs
/// - `max_evals` / `max_iters`: task budgets (None = unlimited)
/// - `config`: ES configuration
///
/// Builds a [`BoundedTask`] over the objective and runs the engine until a
/// budget is exhausted.
pub fn evolution_strategy<F>(
    func: F,
    bounds: &[(f64, f64)],
    max_evals: Option<usize>,
    max_iters: Option<usize>,
    config: EsConfig,
) -> Result<EsReport, EsError>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let mut task = BoundedTask::new(func, bounds)?;
    if let Some(n) = max_evals {
        task = task.with_max_evals(n);
    }
    if let Some(n) = max_iters {
        task = task.with_max_iters(n);
    }
    let mut es = EvolutionStrategy::new(task);
    *es.config_mut() = config;
    es.solve()
}
