//! Batch stemming.
//!
//! Large batches are spread over the rayon thread pool; small ones stay on the
//! calling thread where the scheduling overhead would dominate. Output order
//! always matches input order.

use rayon::prelude::*;

use crate::stemmer::Stemmer;

/// Default batch size at which stemming switches to the thread pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Stem every word in `words`.
pub fn stem_batch<S, W>(stemmer: &S, words: &[W]) -> Vec<String>
where
    S: Stemmer + ?Sized,
    W: AsRef<str> + Sync,
{
    stem_batch_with_threshold(stemmer, words, DEFAULT_PARALLEL_THRESHOLD)
}

/// Stem every word in `words`, going parallel from `threshold` words up.
pub fn stem_batch_with_threshold<S, W>(stemmer: &S, words: &[W], threshold: usize) -> Vec<String>
where
    S: Stemmer + ?Sized,
    W: AsRef<str> + Sync,
{
    if words.len() < threshold.max(1) {
        words.iter().map(|word| stemmer.stem(word.as_ref())).collect()
    } else {
        words
            .par_iter()
            .map(|word| stemmer.stem(word.as_ref()))
            .collect()
    }
}
