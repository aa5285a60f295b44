//! Porter stemming algorithm.
//!
//! This module implements the suffix-stripping algorithm described in
//! M.F. Porter, "An algorithm for suffix stripping", Program 14(3), 1980,
//! including the two published table revisions (`-bli` and `-logi`).
//!
//! # Algorithm
//!
//! A word is first normalized (ASCII lower-case letters only). Words shorter
//! than three letters are returned at that point. Everything else runs through
//! eight suffix phases in a fixed order:
//!
//! 1. Plurals: `-sses`, `-ies`, `-ss`, `-s`
//! 2. `-eed`, `-ed`, `-ing`, plus the cleanup that restores `-e` or undoubles
//! 3. `-y` → `-i`
//! 4. `-ational` → `-ate`, `-tional` → `-tion`, ...
//! 5. `-icate` → `-ic`, `-ative` → "", ...
//! 6. Remove `-al`, `-ance`, `-ence`, `-ion`, ...
//! 7. Remove a final `-e`
//! 8. `-ll` → `-l`
//!
//! Rule tables live in [`rules`], the consonant/vowel predicates in [`region`]
//! and the phase bodies in [`phase`].
//!
//! # Examples
//!
//! ```
//! use porter_stem::porter::stem;
//!
//! assert_eq!(stem("caresses"), "caress");
//! assert_eq!(stem("relational"), "relat");
//! assert_eq!(stem("RUNNING"), "run");
//! ```

pub mod phase;
pub mod region;
pub mod rules;
pub mod trace;

pub use phase::{Phase, normalize};
pub use trace::{NoopObserver, PhaseObserver, PhaseStep, StemTrace, TracingObserver};

use crate::config::StemmerConfig;
use crate::stemmer::Stemmer;

/// Words shorter than this (after normalization) skip the suffix phases.
pub const MIN_STEM_LENGTH: usize = 3;

/// Stem `word` with the canonical Porter rules.
///
/// Total over every input: punctuation, digits and non-ASCII characters are
/// stripped, and an input with no letters yields an empty string.
pub fn stem(word: &str) -> String {
    PorterStemmer::new().stem_with_observer(word, &mut NoopObserver)
}

/// Stem `word` and return the full per-phase trace.
pub fn stem_traced(word: &str) -> StemTrace {
    let mut trace = StemTrace::new();
    PorterStemmer::new().stem_with_observer(word, &mut trace);
    trace
}

/// Porter stemmer.
///
/// Stateless apart from its settings, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PorterStemmer {
    /// Short-word bypass threshold.
    min_length: usize,
    /// Emit `tracing` events for every phase that rewrites the word.
    trace: bool,
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl PorterStemmer {
    /// Create a Porter stemmer with the canonical settings.
    pub fn new() -> Self {
        PorterStemmer {
            min_length: MIN_STEM_LENGTH,
            trace: false,
        }
    }

    /// Create a stemmer from a configuration.
    ///
    /// Only `min_length` and `trace` apply here; caching and batching are
    /// handled by [`crate::cache::CachedStemmer`] and [`crate::batch`].
    pub fn from_config(config: &StemmerConfig) -> Self {
        PorterStemmer {
            min_length: config.min_length,
            trace: config.trace,
        }
    }

    /// Emit a `tracing` event for every phase that changes a word.
    pub fn with_tracing(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// The short-word bypass threshold.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Run the pipeline, reporting each executed phase to `observer`.
    pub fn stem_with_observer(&self, word: &str, observer: &mut dyn PhaseObserver) -> String {
        let mut current = normalize(word);
        observer.on_phase(Phase::Normalize, word, &current);

        if current.len() < self.min_length {
            return current;
        }

        for phase in Phase::suffix_phases() {
            let next = phase.apply(&current);
            observer.on_phase(*phase, &current, &next);
            current = next;
        }

        current
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if self.trace {
            self.stem_with_observer(word, &mut TracingObserver)
        } else {
            self.stem_with_observer(word, &mut NoopObserver)
        }
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("agreed"), "agre");
        assert_eq!(stem("feed"), "feed");
    }

    #[test]
    fn test_normalization_applies_before_stemming() {
        assert_eq!(stem("RUNNING"), stem("running"));
        assert_eq!(stem("run-ning!"), stem("running"));
        assert_eq!(stem("  Hopefulness.  "), "hope");
        assert_eq!(stem("!!!"), "");
        assert_eq!(stem("123"), "");
    }

    #[test]
    fn test_short_words_bypass_phases() {
        assert_eq!(stem("is"), "is");
        assert_eq!(stem("A"), "a");
        assert_eq!(stem("I'd"), "id");
        assert_eq!(stem("s"), "s");
        // Three letters is long enough to be stemmed.
        assert_eq!(stem("its"), "it");
    }

    #[test]
    fn test_trace_covers_every_phase() {
        let trace = stem_traced("Relational");
        let phases: Vec<Phase> = trace.steps.iter().map(|step| step.phase).collect();
        assert_eq!(phases, Phase::ALL.to_vec());
        assert_eq!(trace.result(), Some("relat"));

        let changed: Vec<Phase> = trace.changes().map(|step| step.phase).collect();
        assert_eq!(
            changed,
            vec![Phase::Normalize, Phase::Derivational, Phase::TrailingE]
        );
    }

    #[test]
    fn test_trace_stops_after_normalize_for_short_words() {
        let trace = stem_traced("Is");
        assert_eq!(trace.steps.len(), 1);
        assert_eq!(trace.steps[0].phase, Phase::Normalize);
        assert_eq!(trace.result(), Some("is"));
    }

    #[test]
    fn test_traced_stemmer_matches_plain() {
        let traced = PorterStemmer::new().with_tracing(true);
        for word in ["generalization", "hopping", "sky", "controlling"] {
            assert_eq!(traced.stem(word), stem(word));
        }
    }

    #[test]
    fn test_min_length_from_config() {
        let config = StemmerConfig::default().min_length(5);
        let stemmer = PorterStemmer::from_config(&config);
        assert_eq!(stemmer.min_length(), 5);
        assert_eq!(stemmer.stem("cats"), "cats");
        assert_eq!(stemmer.stem("horses"), "hors");
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(PorterStemmer::new().name(), "porter");
    }
}
