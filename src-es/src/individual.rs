//! A single candidate solution: search point, cached fitness and personal
//! mutation step size.

use ndarray::Array1;
use rand::Rng;
use rand::rngs::StdRng;

use crate::task::Task;
use crate::EsError;

/// Default mutation step size for freshly constructed individuals.
pub const DEFAULT_RHO: f64 = 1.0;

/// One member of the population. Individuals are never mutated in place:
/// "updating" one means constructing a replacement, so a generation's
/// population is immutable while it is being read.
#[derive(Debug, Clone)]
pub struct Individual {
    x: Array1<f64>,
    f: f64,
    rho: f64,
}

impl Individual {
    /// Draw a uniform-random point inside the task's bounds and evaluate it.
    /// The step size starts at [`DEFAULT_RHO`].
    pub fn random<T: Task>(task: &mut T, rng: &mut StdRng) -> Result<Self, EsError> {
        let mut x = Array1::<f64>::zeros(task.dim());
        for i in 0..x.len() {
            let lo = task.lower()[i];
            let hi = task.upper()[i];
            x[i] = lo + rng.random::<f64>() * (hi - lo);
        }
        let f = task.evaluate(&x)?;
        Ok(Self { x, f, rho: DEFAULT_RHO })
    }

    /// Evaluate an explicit vector against the task. The step size starts at
    /// [`DEFAULT_RHO`]; offspring do not inherit their parent's step size.
    pub fn evaluated<T: Task>(x: Array1<f64>, task: &mut T) -> Result<Self, EsError> {
        let f = task.evaluate(&x)?;
        Ok(Self { x, f, rho: DEFAULT_RHO })
    }

    /// Assemble an individual from already-known parts.
    pub fn from_parts(x: Array1<f64>, f: f64, rho: f64) -> Self {
        debug_assert!(rho > 0.0, "step size must stay positive");
        Self { x, f, rho }
    }

    /// Replacement with a different step size, keeping the search point and
    /// its fitness.
    pub fn with_rho(&self, rho: f64) -> Self {
        Self { x: self.x.clone(), f: self.f, rho }
    }

    /// The search point.
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// The cached objective value at `x`.
    pub fn f(&self) -> f64 {
        self.f
    }

    /// The personal mutation step size.
    pub fn rho(&self) -> f64 {
        self.rho
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::BoundedTask;
    use rand::SeedableRng;

    fn sum_sq(x: &Array1<f64>) -> f64 {
        x.iter().map(|&xi| xi * xi).sum()
    }

    #[test]
    fn test_random_individual_within_bounds() {
        let mut task = BoundedTask::new(sum_sq, &[(-3.0, -1.0), (2.0, 5.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let ind = Individual::random(&mut task, &mut rng).unwrap();
            assert!(ind.x()[0] >= -3.0 && ind.x()[0] <= -1.0);
            assert!(ind.x()[1] >= 2.0 && ind.x()[1] <= 5.0);
            assert_eq!(ind.rho(), DEFAULT_RHO);
            assert_eq!(ind.f(), sum_sq(ind.x()));
        }
    }

    #[test]
    fn test_replacement_keeps_point() {
        let x = Array1::from_vec(vec![1.0, 2.0]);
        let a = Individual::from_parts(x.clone(), 5.0, 1.0);
        let b = a.with_rho(0.5);
        assert_eq!(b.x(), &x);
        assert_eq!(b.f(), 5.0);
        assert_eq!(b.rho(), 0.5);
        // original untouched
        assert_eq!(a.rho(), 1.0);
    }
}
