//! The stemming trait shared by every stemmer in the crate.

use std::sync::Arc;

use crate::cache::CachedStemmer;
use crate::config::StemmerConfig;
use crate::error::Result;
use crate::porter::PorterStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

impl<S: Stemmer + ?Sized> Stemmer for Box<S> {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: Stemmer + ?Sized> Stemmer for Arc<S> {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Build the stemmer described by `config`.
///
/// A non-zero `cache_capacity` wraps the Porter stemmer in a
/// [`CachedStemmer`].
pub fn build_stemmer(config: &StemmerConfig) -> Result<Arc<dyn Stemmer>> {
    config.validate()?;

    let porter = PorterStemmer::from_config(config);
    if config.cache_capacity > 0 {
        Ok(Arc::new(CachedStemmer::with_capacity(
            porter,
            config.cache_capacity,
        )))
    } else {
        Ok(Arc::new(porter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_plain_stemmer() {
        let stemmer = build_stemmer(&StemmerConfig::default()).unwrap();
        assert_eq!(stemmer.name(), "porter");
        assert_eq!(stemmer.stem("connections"), "connect");
    }

    #[test]
    fn test_build_cached_stemmer() {
        let config = StemmerConfig::default().cache_capacity(16);
        let stemmer = build_stemmer(&config).unwrap();
        assert_eq!(stemmer.name(), "cached");
        assert_eq!(stemmer.stem("connections"), "connect");
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = StemmerConfig::default().min_length(0);
        assert!(build_stemmer(&config).is_err());
    }

    #[test]
    fn test_boxed_stemmer_delegates() {
        let boxed: Box<dyn Stemmer> = Box::new(PorterStemmer::new());
        assert_eq!(boxed.stem("ponies"), "poni");
        assert_eq!(boxed.name(), "porter");
    }
}
