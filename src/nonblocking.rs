//! Async entry points for non-blocking call sites.
//!
//! Stemming has no suspension points. These wrappers only decide where the
//! work runs; every function returns exactly what the synchronous path returns
//! and none of them can fail.

use std::sync::Arc;

use futures::stream::{Stream, StreamExt};
use tracing::warn;

use crate::batch::stem_batch;
use crate::porter::{PorterStemmer, stem};
use crate::stemmer::Stemmer;

/// Stem one word after yielding to the scheduler once.
pub async fn stem_async(word: &str) -> String {
    tokio::task::yield_now().await;
    stem(word)
}

/// Stem a batch on tokio's blocking pool with the canonical stemmer.
pub async fn stem_all_async(words: Vec<String>) -> Vec<String> {
    stem_all_async_with(Arc::new(PorterStemmer::new()), words).await
}

/// Stem a batch on tokio's blocking pool with `stemmer`.
///
/// If the blocking task cannot complete (runtime shutting down), the batch is
/// stemmed inline instead, so callers always get a full result.
pub async fn stem_all_async_with(stemmer: Arc<dyn Stemmer>, words: Vec<String>) -> Vec<String> {
    let words: Arc<[String]> = words.into();

    let task = {
        let stemmer = Arc::clone(&stemmer);
        let words = Arc::clone(&words);
        tokio::task::spawn_blocking(move || stem_batch(stemmer.as_ref(), &words[..]))
    };

    match task.await {
        Ok(stems) => stems,
        Err(e) => {
            warn!(error = %e, "blocking stem task failed, stemming inline");
            stem_batch(stemmer.as_ref(), &words[..])
        }
    }
}

/// Map a stream of words to a stream of stems, preserving order.
pub fn stem_stream<St>(words: St) -> impl Stream<Item = String>
where
    St: Stream,
    St::Item: AsRef<str>,
{
    let stemmer = PorterStemmer::new();
    words.map(move |word| stemmer.stem(word.as_ref()))
}
