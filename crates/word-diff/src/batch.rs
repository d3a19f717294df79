use log::trace;
use rayon::prelude::*;

use crate::word_diff::WordDiff;

/// Diff many (original, revised) pairs in parallel.
///
/// Infallible shorthand for `DiffConfig::default().diff_batch(pairs)`: with no
/// size limit every pair succeeds. Results come back in the same order as `pairs`.
pub fn diff_batch<S>(pairs: &[(S, S)]) -> Vec<WordDiff>
where
    S: AsRef<str> + Sync,
{
    map_pairs(pairs, |_, original, revised| WordDiff::new(original, revised))
}

/// Apply `diff_pair` to every pair on the rayon pool, keeping input order
pub(crate) fn map_pairs<S, T, F>(pairs: &[(S, S)], diff_pair: F) -> Vec<T>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(usize, &str, &str) -> T + Sync + Send,
{
    trace!("diffing batch of {} pairs", pairs.len());

    pairs
        .par_iter()
        .enumerate()
        .map(|(index, (original, revised))| diff_pair(index, original.as_ref(), revised.as_ref()))
        .collect()
}
