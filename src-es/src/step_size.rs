//! 1/5-success-rule step-size control.
//!
//! Over a window of `k` iterations the engine counts successes `ki`
//! (mutations that improved fitness, or offspring that displaced parents).
//! At each window boundary the step size is rescaled: fewer than one success
//! in five contracts it by `c_r`, more than one in five expands it by `c_a`,
//! exactly one in five leaves it unchanged.

use crate::individual::Individual;

/// Rescale a single step size from the success ratio `phi = ki / k`.
pub(crate) fn one_fifth_rho(rho: f64, ki: usize, k: usize, c_a: f64, c_r: f64) -> f64 {
    let phi = ki as f64 / k as f64;
    if phi < 0.2 {
        c_r * rho
    } else if phi > 0.2 {
        c_a * rho
    } else {
        rho
    }
}

/// Apply the rule uniformly to every member of the population, from one
/// shared success counter. Each survivor is replaced by a copy carrying the
/// rescaled step size.
pub(crate) fn rescale_population(
    pop: Vec<Individual>,
    ki: usize,
    k: usize,
    c_a: f64,
    c_r: f64,
) -> Vec<Individual> {
    pop.into_iter()
        .map(|ind| {
            let rho = one_fifth_rho(ind.rho(), ki, k, c_a, c_r);
            ind.with_rho(rho)
        })
        .collect()
}
