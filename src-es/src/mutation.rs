use ndarray::Array1;
use rand::Rng;
use rand_distr::StandardNormal;

/// Additive Gaussian mutation: every coordinate is perturbed by an
/// independent draw from N(0, rho^2). Consumes exactly `x.len()` draws from
/// the random stream and has no other side effect.
pub(crate) fn mutate_gaussian<R: Rng + ?Sized>(
    x: &Array1<f64>,
    rho: f64,
    rng: &mut R,
) -> Array1<f64> {
    x.mapv(|xi| {
        let z: f64 = rng.sample(StandardNormal);
        xi + rho * z
    })
}
