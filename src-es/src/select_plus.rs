use std::cmp::Ordering;

use crate::individual::Individual;

/// Plus-selection for the (mu+1) and (mu+lambda) variants: parents and
/// offspring compete in one pool and the `mu` best survive.
///
/// Offspring are listed ahead of parents so that, under the stable ascending
/// sort, an offspring with equal fitness displaces a parent. Each survivor
/// carries a provenance flag instead of being matched back into the parent
/// list by value, so the returned success count is unambiguous even when two
/// individuals share the same vector.
pub(crate) fn select_plus(
    parents: Vec<Individual>,
    offspring: Vec<Individual>,
    mu: usize,
) -> (Vec<Individual>, usize) {
    let mut pool: Vec<(Individual, bool)> = offspring
        .into_iter()
        .map(|ind| (ind, true))
        .chain(parents.into_iter().map(|ind| (ind, false)))
        .collect();
    pool.sort_by(|a, b| a.0.f().partial_cmp(&b.0.f()).unwrap_or(Ordering::Equal));
    pool.truncate(mu);

    let newcomers = pool.iter().filter(|(_, is_new)| *is_new).count();
    (pool.into_iter().map(|(ind, _)| ind).collect(), newcomers)
}
