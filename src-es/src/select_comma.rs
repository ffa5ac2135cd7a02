use std::cmp::Ordering;

use crate::individual::Individual;

/// Comma-selection for the (mu,lambda) variant: parents are discarded and the
/// next generation is drawn from the offspring alone.
///
/// When `mu <= lambda` the `mu` best offspring survive. When `mu > lambda`
/// the sorted offspring are replicated in blocks of `lambda` until `mu` slots
/// are filled, the final block truncated to the remainder.
pub(crate) fn select_comma(offspring: Vec<Individual>, mu: usize, lam: usize) -> Vec<Individual> {
    let mut sorted = offspring;
    sorted.sort_by(|a, b| a.f().partial_cmp(&b.f()).unwrap_or(Ordering::Equal));

    if mu <= lam {
        sorted.truncate(mu);
        return sorted;
    }

    let blocks = mu.div_ceil(lam);
    let mut next = Vec::with_capacity(mu);
    for j in 0..blocks {
        let remaining = mu - lam * j;
        let take = remaining.min(lam);
        next.extend(sorted[..take].iter().cloned());
    }
    next
}
