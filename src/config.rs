//! Configuration for the stemmer and the layers around it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StemError};
use crate::porter::MIN_STEM_LENGTH;

/// Settings for building a stemmer.
///
/// The defaults give the canonical Porter algorithm with no cache. Every field
/// is optional in JSON; missing fields take their default.
///
/// # Example
///
/// ```
/// use porter_stem::config::StemmerConfig;
///
/// let config = StemmerConfig::from_json_str(r#"{ "cache_capacity": 4096 }"#).unwrap();
/// assert_eq!(config.cache_capacity, 4096);
/// assert_eq!(config.min_length, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Normalized words shorter than this are returned without stemming.
    /// Values other than 3 deviate from the published algorithm.
    pub min_length: usize,

    /// Number of distinct words to memoize. 0 disables the cache.
    pub cache_capacity: usize,

    /// Batches smaller than this are stemmed on the calling thread.
    pub parallel_threshold: usize,

    /// Emit `tracing` events for every phase that rewrites a word.
    pub trace: bool,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        StemmerConfig {
            min_length: MIN_STEM_LENGTH,
            cache_capacity: 0,
            parallel_threshold: 256,
            trace: false,
        }
    }
}

impl StemmerConfig {
    /// Set the short-word bypass threshold.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the memoization capacity.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the sequential/parallel cut-over for batches.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enable or disable per-phase tracing.
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Check the configuration for values the stemmer cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(StemError::config("min_length must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StemmerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading stemmer config");
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
