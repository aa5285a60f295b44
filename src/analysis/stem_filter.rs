//! Token filter that applies a stemmer to a token stream.

use std::fmt;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::porter::PorterStemmer;
use crate::stemmer::Stemmer;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Filter that applies stemming to tokens.
///
/// Stopped tokens pass through untouched. Stemmed tokens keep their surface
/// form in `original_text`.
#[derive(Clone)]
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let stemmer = Arc::clone(&self.stemmer);
        Box::new(tokens.map(move |token| {
            if token.is_stopped() {
                token
            } else {
                let stemmed = stemmer.stem(&token.text);
                token.with_text(stemmed)
            }
        }))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
