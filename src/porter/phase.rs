//! The individual phases of the Porter pipeline.
//!
//! Each phase is a pure `&str -> String` transformation over a normalized word
//! (ASCII lower-case letters only). [`Phase::apply`] dispatches by name so the
//! driver in [`super`] can run them in order and report every step.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::region::{ends_with_cvc, ends_with_double_consonant, has_vowel, measure};
use super::rules::{DERIVATIONAL, PLURAL, RuleTable, SECONDARY_DERIVATIONAL, SUFFIX_REMOVAL};

/// A named stage of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Lower-case and strip everything that is not an ASCII letter.
    Normalize,
    /// `-sses`, `-ies`, `-ss`, `-s`.
    Plural,
    /// `-eed`, `-ed`, `-ing` and the cleanup that follows them.
    PastParticiple,
    /// `-y` to `-i`.
    TerminalY,
    /// `-ational`, `-izer`, `-iveness`, ...
    Derivational,
    /// `-icate`, `-ful`, `-ness`, ...
    SecondaryDerivational,
    /// `-al`, `-ance`, `-ement`, `-ion`, ...
    SuffixRemoval,
    /// Final `-e`.
    TrailingE,
    /// Final `-ll`.
    DoubleL,
}

impl Phase {
    /// Every phase in the order the pipeline runs them.
    pub const ALL: [Phase; 9] = [
        Phase::Normalize,
        Phase::Plural,
        Phase::PastParticiple,
        Phase::TerminalY,
        Phase::Derivational,
        Phase::SecondaryDerivational,
        Phase::SuffixRemoval,
        Phase::TrailingE,
        Phase::DoubleL,
    ];

    /// Phases that run after normalization.
    pub fn suffix_phases() -> &'static [Phase] {
        &Self::ALL[1..]
    }

    /// Short identifier used in traces and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Normalize => "normalize",
            Phase::Plural => "plural",
            Phase::PastParticiple => "past_participle",
            Phase::TerminalY => "terminal_y",
            Phase::Derivational => "derivational",
            Phase::SecondaryDerivational => "secondary_derivational",
            Phase::SuffixRemoval => "suffix_removal",
            Phase::TrailingE => "trailing_e",
            Phase::DoubleL => "double_l",
        }
    }

    /// Run this phase on `word`.
    pub fn apply(&self, word: &str) -> String {
        match self {
            Phase::Normalize => normalize(word),
            Phase::Plural => plural(word),
            Phase::PastParticiple => past_participle(word),
            Phase::TerminalY => terminal_y(word),
            Phase::Derivational => replace_longest(&DERIVATIONAL, word, 0),
            Phase::SecondaryDerivational => replace_longest(&SECONDARY_DERIVATIONAL, word, 0),
            Phase::SuffixRemoval => replace_longest(&SUFFIX_REMOVAL, word, 1),
            Phase::TrailingE => trailing_e(word),
            Phase::DoubleL => double_l(word),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower-case `word` and drop every character that is not an ASCII letter.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Apply the longest matching rule of `table` if the stem in front of it has
/// a measure greater than `min_measure`.
fn replace_longest(table: &RuleTable, word: &str, min_measure: usize) -> String {
    let bytes = word.as_bytes();
    match table.longest_match(bytes) {
        Some(rule) if measure(rule.stem_of(bytes)) > min_measure => rule.apply(word),
        _ => word.to_string(),
    }
}

fn plural(word: &str) -> String {
    match PLURAL.longest_match(word.as_bytes()) {
        Some(rule) => rule.apply(word),
        None => word.to_string(),
    }
}

fn past_participle(word: &str) -> String {
    let bytes = word.as_bytes();

    if let Some(stem) = bytes.strip_suffix(b"eed") {
        // A word ending in -eed is never considered for -ed.
        return if measure(stem) > 0 {
            word[..word.len() - 1].to_string()
        } else {
            word.to_string()
        };
    }

    let stem_len = if bytes.ends_with(b"ed") {
        word.len() - 2
    } else if bytes.ends_with(b"ing") {
        word.len() - 3
    } else {
        return word.to_string();
    };

    if !has_vowel(&bytes[..stem_len]) {
        return word.to_string();
    }

    restore_stem_ending(&word[..stem_len])
}

/// Cleanup after -ed/-ing removal so that `conflat` becomes `conflate`,
/// `hopp` becomes `hop` and `fil` becomes `file`.
fn restore_stem_ending(stem: &str) -> String {
    let bytes = stem.as_bytes();

    if bytes.ends_with(b"at") || bytes.ends_with(b"bl") || bytes.ends_with(b"iz") {
        format!("{stem}e")
    } else if ends_with_double_consonant(bytes)
        && !matches!(bytes[bytes.len() - 1], b'l' | b's' | b'z')
    {
        stem[..stem.len() - 1].to_string()
    } else if measure(bytes) == 1 && ends_with_cvc(bytes) {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

fn terminal_y(word: &str) -> String {
    match word.as_bytes().strip_suffix(b"y") {
        Some(stem) if has_vowel(stem) => format!("{}i", &word[..stem.len()]),
        _ => word.to_string(),
    }
}

fn trailing_e(word: &str) -> String {
    let Some(stem) = word.as_bytes().strip_suffix(b"e") else {
        return word.to_string();
    };

    let m = measure(stem);
    if m > 1 || (m == 1 && !ends_with_cvc(stem)) {
        word[..stem.len()].to_string()
    } else {
        word.to_string()
    }
}

fn double_l(word: &str) -> String {
    let bytes = word.as_bytes();
    if bytes.ends_with(b"ll") && measure(bytes) > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(phase: Phase, cases: &[(&str, &str)]) {
        for (input, expected) in cases {
            assert_eq!(phase.apply(input), *expected, "{phase}: {input}");
        }
    }

    #[test]
    fn test_normalize() {
        check(
            Phase::Normalize,
            &[
                ("Running", "running"),
                ("run-ning!", "running"),
                ("O'Neill", "oneill"),
                ("café", "caf"),
                ("42", ""),
                ("", ""),
            ],
        );
    }

    #[test]
    fn test_plural() {
        check(
            Phase::Plural,
            &[
                ("caresses", "caress"),
                ("ponies", "poni"),
                ("ties", "ti"),
                ("caress", "caress"),
                ("cats", "cat"),
                ("cat", "cat"),
            ],
        );
    }

    #[test]
    fn test_past_participle() {
        check(
            Phase::PastParticiple,
            &[
                ("feed", "feed"),
                ("agreed", "agree"),
                ("plastered", "plaster"),
                ("bled", "bled"),
                ("motoring", "motor"),
                ("sing", "sing"),
            ],
        );
    }

    #[test]
    fn test_past_participle_cleanup() {
        check(
            Phase::PastParticiple,
            &[
                ("conflated", "conflate"),
                ("troubled", "trouble"),
                ("sized", "size"),
                ("hopping", "hop"),
                ("tanned", "tan"),
                ("falling", "fall"),
                ("hissing", "hiss"),
                ("fizzed", "fizz"),
                ("failing", "fail"),
                ("filing", "file"),
            ],
        );
    }

    #[test]
    fn test_terminal_y() {
        check(Phase::TerminalY, &[("happy", "happi"), ("sky", "sky"), ("y", "y")]);
    }

    #[test]
    fn test_derivational() {
        check(
            Phase::Derivational,
            &[
                ("relational", "relate"),
                ("conditional", "condition"),
                ("rational", "rational"),
                ("valenci", "valence"),
                ("hesitanci", "hesitance"),
                ("digitizer", "digitize"),
                ("conformabli", "conformable"),
                ("radicalli", "radical"),
                ("differentli", "different"),
                ("vileli", "vile"),
                ("analogousli", "analogous"),
                ("vietnamization", "vietnamize"),
                ("predication", "predicate"),
                ("operator", "operate"),
                ("feudalism", "feudal"),
                ("decisiveness", "decisive"),
                ("hopefulness", "hopeful"),
                ("callousness", "callous"),
                ("formaliti", "formal"),
                ("sensitiviti", "sensitive"),
                ("sensibiliti", "sensible"),
                ("archaeologi", "archaeolog"),
            ],
        );
    }

    #[test]
    fn test_secondary_derivational() {
        check(
            Phase::SecondaryDerivational,
            &[
                ("triplicate", "triplic"),
                ("formative", "form"),
                ("formalize", "formal"),
                ("electriciti", "electric"),
                ("electrical", "electric"),
                ("hopeful", "hope"),
                ("goodness", "good"),
            ],
        );
    }

    #[test]
    fn test_suffix_removal() {
        check(
            Phase::SuffixRemoval,
            &[
                ("revival", "reviv"),
                ("allowance", "allow"),
                ("inference", "infer"),
                ("airliner", "airlin"),
                ("gyroscopic", "gyroscop"),
                ("adjustable", "adjust"),
                ("defensible", "defens"),
                ("irritant", "irrit"),
                ("replacement", "replac"),
                ("adjustment", "adjust"),
                ("dependent", "depend"),
                ("adoption", "adopt"),
                ("homologou", "homolog"),
                ("communism", "commun"),
                ("activate", "activ"),
                ("angulariti", "angular"),
                ("homologous", "homolog"),
                ("effective", "effect"),
                ("bowdlerize", "bowdler"),
            ],
        );
    }

    #[test]
    fn test_suffix_removal_rejects_short_stems() {
        // m("rel") == 1, and "onion" has no s/t before -ion.
        check(Phase::SuffixRemoval, &[("relate", "relate"), ("onion", "onion")]);
    }

    #[test]
    fn test_trailing_e() {
        check(
            Phase::TrailingE,
            &[
                ("probate", "probat"),
                ("rate", "rate"),
                ("cease", "ceas"),
                ("hope", "hope"),
            ],
        );
    }

    #[test]
    fn test_double_l() {
        check(Phase::DoubleL, &[("controll", "control"), ("roll", "roll")]);
    }

    #[test]
    fn test_phase_order_and_names() {
        assert_eq!(Phase::ALL[0], Phase::Normalize);
        assert_eq!(Phase::suffix_phases().len(), 8);
        assert_eq!(Phase::DoubleL.to_string(), "double_l");
        assert_eq!(
            serde_json::to_string(&Phase::PastParticiple).unwrap(),
            "\"past_participle\""
        );
    }
}
