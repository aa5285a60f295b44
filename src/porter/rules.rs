//! Static suffix rule tables and longest-match selection.
//!
//! Each phase that rewrites a suffix owns one [`RuleTable`]. Selection always
//! picks the longest suffix that matches the word's tail; the phase then checks
//! its guard against the stem in front of that suffix. When the guard fails the
//! word stays as it is. Shorter suffixes are never retried, so `rational` is
//! not rewritten through `tional` once `ational` has been selected and
//! rejected.

/// A single `suffix -> replacement` rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Suffix to match at the end of the word.
    pub suffix: &'static str,
    /// Text that replaces the suffix.
    pub replacement: &'static str,
    /// Letters allowed directly before the suffix. Empty means any.
    pub preceded_by: &'static [u8],
}

impl SuffixRule {
    /// Create an unconditional rule.
    pub const fn new(suffix: &'static str, replacement: &'static str) -> Self {
        SuffixRule {
            suffix,
            replacement,
            preceded_by: &[],
        }
    }

    /// Create a rule that only matches after one of `preceded_by`.
    pub const fn after(
        suffix: &'static str,
        replacement: &'static str,
        preceded_by: &'static [u8],
    ) -> Self {
        SuffixRule {
            suffix,
            replacement,
            preceded_by,
        }
    }

    /// Check whether this rule matches the tail of `word`.
    pub fn matches(&self, word: &[u8]) -> bool {
        let suffix = self.suffix.as_bytes();
        if !word.ends_with(suffix) {
            return false;
        }
        if self.preceded_by.is_empty() {
            return true;
        }
        let stem_len = word.len() - suffix.len();
        stem_len > 0 && self.preceded_by.contains(&word[stem_len - 1])
    }

    /// The part of `word` in front of the suffix.
    ///
    /// Only meaningful when [`matches`](Self::matches) returned true.
    pub fn stem_of<'a>(&self, word: &'a [u8]) -> &'a [u8] {
        &word[..word.len() - self.suffix.len()]
    }

    /// Rewrite `word`, replacing the suffix.
    pub fn apply(&self, word: &str) -> String {
        let stem_len = word.len() - self.suffix.len();
        let mut result = String::with_capacity(stem_len + self.replacement.len());
        result.push_str(&word[..stem_len]);
        result.push_str(self.replacement);
        result
    }
}

/// An ordered, immutable table of suffix rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    rules: &'static [SuffixRule],
}

impl RuleTable {
    /// Wrap a static slice of rules.
    pub const fn new(rules: &'static [SuffixRule]) -> Self {
        RuleTable { rules }
    }

    /// All rules in definition order.
    pub fn rules(&self) -> &'static [SuffixRule] {
        self.rules
    }

    /// Select the longest rule matching `word`.
    ///
    /// Equal lengths resolve to the earlier rule; the tables below contain no
    /// such ties.
    pub fn longest_match(&self, word: &[u8]) -> Option<&'static SuffixRule> {
        let mut best: Option<&'static SuffixRule> = None;
        for rule in self.rules {
            if rule.matches(word) && best.is_none_or(|b| rule.suffix.len() > b.suffix.len()) {
                best = Some(rule);
            }
        }
        best
    }
}

/// Plurals and third person singular.
pub static PLURAL: RuleTable = RuleTable::new(PLURAL_RULES);

const PLURAL_RULES: &[SuffixRule] = &[
    SuffixRule::new("sses", "ss"),
    SuffixRule::new("ies", "i"),
    SuffixRule::new("ss", "ss"),
    SuffixRule::new("s", ""),
];

/// Derivational suffixes mapped to a shorter derivational form.
pub static DERIVATIONAL: RuleTable = RuleTable::new(DERIVATIONAL_RULES);

const DERIVATIONAL_RULES: &[SuffixRule] = &[
    SuffixRule::new("ational", "ate"),
    SuffixRule::new("tional", "tion"),
    SuffixRule::new("enci", "ence"),
    SuffixRule::new("anci", "ance"),
    SuffixRule::new("izer", "ize"),
    SuffixRule::new("abli", "able"),
    SuffixRule::new("bli", "ble"),
    SuffixRule::new("alli", "al"),
    SuffixRule::new("entli", "ent"),
    SuffixRule::new("eli", "e"),
    SuffixRule::new("ousli", "ous"),
    SuffixRule::new("ization", "ize"),
    SuffixRule::new("ation", "ate"),
    SuffixRule::new("ator", "ate"),
    SuffixRule::new("alism", "al"),
    SuffixRule::new("iveness", "ive"),
    SuffixRule::new("fulness", "ful"),
    SuffixRule::new("ousness", "ous"),
    SuffixRule::new("aliti", "al"),
    SuffixRule::new("iviti", "ive"),
    SuffixRule::new("biliti", "ble"),
    SuffixRule::new("logi", "log"),
];

/// Second derivational pass: `-ic-`, `-ful`, `-ness` and friends.
pub static SECONDARY_DERIVATIONAL: RuleTable = RuleTable::new(SECONDARY_DERIVATIONAL_RULES);

const SECONDARY_DERIVATIONAL_RULES: &[SuffixRule] = &[
    SuffixRule::new("icate", "ic"),
    SuffixRule::new("ative", ""),
    SuffixRule::new("alize", "al"),
    SuffixRule::new("iciti", "ic"),
    SuffixRule::new("ical", "ic"),
    SuffixRule::new("ful", ""),
    SuffixRule::new("ness", ""),
];

/// Suffixes dropped outright once the stem is long enough.
pub static SUFFIX_REMOVAL: RuleTable = RuleTable::new(SUFFIX_REMOVAL_RULES);

const SUFFIX_REMOVAL_RULES: &[SuffixRule] = &[
    SuffixRule::new("al", ""),
    SuffixRule::new("ance", ""),
    SuffixRule::new("ence", ""),
    SuffixRule::new("er", ""),
    SuffixRule::new("ic", ""),
    SuffixRule::new("able", ""),
    SuffixRule::new("ible", ""),
    SuffixRule::new("ant", ""),
    SuffixRule::new("ement", ""),
    SuffixRule::new("ment", ""),
    SuffixRule::new("ent", ""),
    SuffixRule::after("ion", "", b"st"),
    SuffixRule::new("ou", ""),
    SuffixRule::new("ism", ""),
    SuffixRule::new("ate", ""),
    SuffixRule::new("iti", ""),
    SuffixRule::new("ous", ""),
    SuffixRule::new("ive", ""),
    SuffixRule::new("ize", ""),
];
