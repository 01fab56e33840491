// N-gram frequency counting.
//
// A term frequency vector maps each n-gram (1..=max_len consecutive tokens)
// to the number of times it occurs. The counter is generic over the token
// type: the orchestrator feeds it vocabulary indices, tests feed it &str.

use std::collections::HashMap;
use std::hash::Hash;

/// An ordered run of consecutive tokens.
pub type NGram<T> = Vec<T>;

/// Term frequency vector: n-gram -> occurrence count.
pub type FrequencyMap<T> = HashMap<NGram<T>, usize>;

/// Count every contiguous n-gram of length 1 through `max_len`.
///
/// For each width n a window slides across `tokens` one step at a time and
/// every full window is counted. Widths longer than the sequence contribute
/// nothing; an empty sequence yields an empty map.
///
/// # Panics
///
/// Panics if `max_len` is 0. Validate user-supplied lengths with
/// [`SimilarityOptions::validate`](super::compare::SimilarityOptions::validate)
/// before calling.
pub fn frequency<T>(tokens: &[T], max_len: usize) -> FrequencyMap<T>
where
    T: Hash + Eq + Clone,
{
    assert!(max_len >= 1, "max n-gram length must be at least 1");

    let mut counts: FrequencyMap<T> = HashMap::new();
    // Widths past the sequence length have no windows
    for width in 1..=max_len.min(tokens.len()) {
        for window in tokens.windows(width) {
            *counts.entry(window.to_vec()).or_insert(0) += 1;
        }
    }
    counts
}
