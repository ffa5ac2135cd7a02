//! Optimization task abstraction: objective evaluation with budget counting,
//! box-bounds repair and the stop predicate polled by the engine.

use ndarray::Array1;

use crate::EsError;

/// External collaborator supplying everything the engine needs to know about
/// the problem: dimension, bounds, counted evaluation and the stop condition.
///
/// The engine only reads from the task; it never resets its counters. The
/// iteration counter is bumped once per engine iteration, inside
/// [`Task::stop_cond_iter`].
pub trait Task {
    /// Problem dimension D.
    fn dim(&self) -> usize;

    /// Per-coordinate lower bounds.
    fn lower(&self) -> &Array1<f64>;

    /// Per-coordinate upper bounds.
    fn upper(&self) -> &Array1<f64>;

    /// Clamp a candidate back into [lower, upper].
    fn repair(&self, x: Array1<f64>) -> Array1<f64>;

    /// Evaluate the objective at `x`, consuming one unit of the evaluation
    /// budget. A failing objective aborts the whole run.
    fn evaluate(&mut self, x: &Array1<f64>) -> Result<f64, EsError>;

    /// Check the stop condition (iteration or evaluation budget exhausted),
    /// then advance the iteration counter. Polled once per engine iteration.
    fn stop_cond_iter(&mut self) -> bool;

    /// Iterations started so far.
    fn iters(&self) -> usize;

    /// Objective evaluations performed so far.
    fn evals(&self) -> usize;
}

/// Standard [`Task`] over a pure objective `f: &Array1<f64> -> f64` with box
/// bounds, an evaluation budget and an iteration budget.
pub struct BoundedTask<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    func: F,
    lower: Array1<f64>,
    upper: Array1<f64>,
    max_evals: usize,
    max_iters: usize,
    evals: usize,
    iters: usize,
}

impl<F> std::fmt::Debug for BoundedTask<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedTask")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("max_evals", &self.max_evals)
            .field("max_iters", &self.max_iters)
            .field("evals", &self.evals)
            .field("iters", &self.iters)
            .finish_non_exhaustive()
    }
}

impl<F> BoundedTask<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    /// Create a task from an objective and (lower, upper) pairs.
    ///
    /// Returns a configuration error when `bounds` is empty or any pair has
    /// upper < lower.
    pub fn new(func: F, bounds: &[(f64, f64)]) -> Result<Self, EsError> {
        if bounds.is_empty() {
            return Err(EsError::invalid("bounds", "dimension must be at least 1"));
        }
        let n = bounds.len();
        let mut lower = Array1::<f64>::zeros(n);
        let mut upper = Array1::<f64>::zeros(n);
        for (i, (lo, hi)) in bounds.iter().enumerate() {
            if hi < lo {
                return Err(EsError::invalid(
                    "bounds",
                    format!("bound[{}] has upper {} < lower {}", i, hi, lo),
                ));
            }
            lower[i] = *lo;
            upper[i] = *hi;
        }
        Ok(Self {
            func,
            lower,
            upper,
            max_evals: usize::MAX,
            max_iters: usize::MAX,
            evals: 0,
            iters: 0,
        })
    }

    /// Limit the number of objective evaluations.
    pub fn with_max_evals(mut self, max_evals: usize) -> Self {
        self.max_evals = max_evals;
        self
    }

    /// Limit the number of engine iterations.
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }
}

impl<F> Task for BoundedTask<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    fn dim(&self) -> usize {
        self.lower.len()
    }

    fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    fn upper(&self) -> &Array1<f64> {
        &self.upper
    }

    fn repair(&self, mut x: Array1<f64>) -> Array1<f64> {
        for i in 0..x.len() {
            if x[i] < self.lower[i] {
                x[i] = self.lower[i];
            }
            if x[i] > self.upper[i] {
                x[i] = self.upper[i];
            }
        }
        x
    }

    fn evaluate(&mut self, x: &Array1<f64>) -> Result<f64, EsError> {
        self.evals += 1;
        let f = (self.func)(x);
        if !f.is_finite() {
            return Err(EsError::Evaluation(format!(
                "objective returned a non-finite value {} at x = {:?}",
                f,
                x.to_vec()
            )));
        }
        Ok(f)
    }

    fn stop_cond_iter(&mut self) -> bool {
        let stop = self.evals >= self.max_evals || self.iters >= self.max_iters;
        self.iters += 1;
        stop
    }

    fn iters(&self) -> usize {
        self.iters
    }

    fn evals(&self) -> usize {
        self.evals
    }
}
