//! Reference vocabularies and verification against them.
//!
//! Stemmer output is only meaningful against a fixed reference, so this module
//! loads `word -> expected stem` tables and checks a [`Stemmer`] against them.
//! Three formats are accepted:
//!
//! - the paired `voc.txt` / `output.txt` files distributed with the algorithm
//!   (one word per line, aligned by line number),
//! - two-column text, `word stem` per line,
//! - a JSON object `{ "word": "stem", ... }`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, StemError};
use crate::stemmer::Stemmer;

/// Worked examples from the algorithm's original description, run through the
/// whole pipeline.
const BUILTIN: &[(&str, &str)] = &[
    ("caresses", "caress"),
    ("ponies", "poni"),
    ("ties", "ti"),
    ("caress", "caress"),
    ("cats", "cat"),
    ("feed", "feed"),
    ("agreed", "agre"),
    ("plastered", "plaster"),
    ("bled", "bled"),
    ("motoring", "motor"),
    ("sing", "sing"),
    ("conflated", "conflat"),
    ("troubled", "troubl"),
    ("sized", "size"),
    ("hopping", "hop"),
    ("tanned", "tan"),
    ("falling", "fall"),
    ("hissing", "hiss"),
    ("fizzed", "fizz"),
    ("failing", "fail"),
    ("filing", "file"),
    ("happy", "happi"),
    ("sky", "sky"),
    ("relational", "relat"),
    ("conditional", "condit"),
    ("rational", "ration"),
    ("valenci", "valenc"),
    ("hesitanci", "hesit"),
    ("digitizer", "digit"),
    ("conformabli", "conform"),
    ("radicalli", "radic"),
    ("differentli", "differ"),
    ("vileli", "vile"),
    ("analogousli", "analog"),
    ("vietnamization", "vietnam"),
    ("predication", "predic"),
    ("operator", "oper"),
    ("feudalism", "feudal"),
    ("decisiveness", "decis"),
    ("hopefulness", "hope"),
    ("callousness", "callous"),
    ("formaliti", "formal"),
    ("sensitiviti", "sensit"),
    ("sensibiliti", "sensibl"),
    ("triplicate", "triplic"),
    ("formative", "form"),
    ("formalize", "formal"),
    ("electriciti", "electr"),
    ("electrical", "electr"),
    ("hopeful", "hope"),
    ("goodness", "good"),
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
    ("probate", "probat"),
    ("rate", "rate"),
    ("cease", "ceas"),
    ("controll", "control"),
    ("roll", "roll"),
    ("generalization", "gener"),
    ("oscillators", "oscil"),
];

/// One `word -> expected stem` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub expected: String,
}

/// An ordered reference vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    /// Build a vocabulary from pairs.
    pub fn from_entries<I, W, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, E)>,
        W: Into<String>,
        E: Into<String>,
    {
        Vocabulary {
            entries: entries
                .into_iter()
                .map(|(word, expected)| VocabularyEntry {
                    word: word.into(),
                    expected: expected.into(),
                })
                .collect(),
        }
    }

    /// The built-in reference examples.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().copied())
    }

    /// Parse aligned word and output lists (`voc.txt` / `output.txt`).
    pub fn from_paired(words: &str, expected: &str) -> Result<Self> {
        let words: Vec<&str> = non_empty_lines(words).collect();
        let expected: Vec<&str> = non_empty_lines(expected).collect();

        if words.len() != expected.len() {
            return Err(StemError::vocabulary(format!(
                "vocabulary has {} words but output has {} stems",
                words.len(),
                expected.len()
            )));
        }

        Ok(Self::from_entries(words.into_iter().zip(expected)))
    }

    /// Parse two-column `word stem` text.
    pub fn from_two_column(content: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut columns = line.split_whitespace();
            match (columns.next(), columns.next(), columns.next()) {
                (Some(word), Some(expected), None) => entries.push((word, expected)),
                _ => {
                    return Err(StemError::vocabulary(format!(
                        "line {}: expected `word stem`, got `{line}`",
                        line_num + 1
                    )));
                }
            }
        }

        Ok(Self::from_entries(entries))
    }

    /// Parse a JSON object mapping words to stems.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(map.len());
        for (word, value) in map {
            let expected = value.as_str().ok_or_else(|| {
                StemError::vocabulary(format!("stem for `{word}` is not a string"))
            })?;
            entries.push((word, expected.to_string()));
        }
        Ok(Self::from_entries(entries))
    }

    /// Load a vocabulary from disk.
    ///
    /// With `expected` the files are read as a `voc.txt` / `output.txt` pair.
    /// Without it, a `.json` file is read as a JSON object and anything else as
    /// two-column text.
    pub fn load<P: AsRef<Path>>(path: P, expected: Option<&Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let vocabulary = match expected {
            Some(expected_path) => {
                let expected = fs::read_to_string(expected_path)?;
                Self::from_paired(&content, &expected)?
            }
            None if path.extension().is_some_and(|ext| ext == "json") => {
                Self::from_json_str(&content)?
            }
            None => Self::from_two_column(&content)?,
        };

        debug!(path = %path.display(), entries = vocabulary.len(), "loaded vocabulary");
        Ok(vocabulary)
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stem every word and compare against the expected stem.
    pub fn verify<S: Stemmer + ?Sized>(&self, stemmer: &S) -> VerificationReport {
        let mut mismatches = Vec::new();
        for entry in &self.entries {
            let actual = stemmer.stem(&entry.word);
            if actual != entry.expected {
                mismatches.push(Mismatch {
                    word: entry.word.clone(),
                    expected: entry.expected.clone(),
                    actual,
                });
            }
        }

        let report = VerificationReport {
            stemmer: stemmer.name().to_string(),
            total: self.entries.len(),
            passed: self.entries.len() - mismatches.len(),
            mismatches,
        };
        info!(
            stemmer = %report.stemmer,
            total = report.total,
            passed = report.passed,
            "vocabulary verification finished"
        );
        report
    }
}

fn non_empty_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// A word whose stem differs from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub word: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of [`Vocabulary::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub stemmer: String,
    pub total: usize,
    pub passed: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    /// True when every word matched.
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{Builder, NamedTempFile};

    use super::*;
    use crate::porter::PorterStemmer;

    /// Stemmer that returns its input, to force mismatches.
    struct Echo;

    impl Stemmer for Echo {
        fn stem(&self, word: &str) -> String {
            word.to_string()
        }

        fn name(&self) -> &'static str {
            "echo"
        }
    }

    #[test]
    fn test_builtin_vocabulary_passes() {
        let report = Vocabulary::builtin().verify(&PorterStemmer::new());
        assert!(report.is_success(), "{:?}", report.mismatches);
        assert_eq!(report.total, BUILTIN.len());
        assert_eq!(report.stemmer, "porter");
    }

    #[test]
    fn test_mismatches_reported() {
        let vocabulary = Vocabulary::from_entries([("cats", "cat"), ("sky", "sky")]);
        let report = vocabulary.verify(&Echo);

        assert!(!report.is_success());
        assert_eq!(report.passed, 1);
        assert_eq!(
            report.mismatches,
            vec![Mismatch {
                word: "cats".to_string(),
                expected: "cat".to_string(),
                actual: "cats".to_string(),
            }]
        );
    }

    #[test]
    fn test_from_paired() {
        let vocabulary = Vocabulary::from_paired("a\naaron\nabaissiez\n", "a\naaron\nabaissiez\n")
            .unwrap();
        assert_eq!(vocabulary.len(), 3);

        let err = Vocabulary::from_paired("a\nb\n", "a\n").unwrap_err();
        assert!(matches!(err, StemError::Vocabulary(_)));
    }

    #[test]
    fn test_from_two_column() {
        let vocabulary = Vocabulary::from_two_column("caresses  caress\n\nponies poni\n").unwrap();
        assert_eq!(vocabulary.entries()[1].word, "ponies");
        assert_eq!(vocabulary.entries()[1].expected, "poni");

        let err = Vocabulary::from_two_column("caresses\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_from_json() {
        let vocabulary = Vocabulary::from_json_str(r#"{ "ponies": "poni" }"#).unwrap();
        assert_eq!(vocabulary.len(), 1);
        assert!(vocabulary.verify(&PorterStemmer::new()).is_success());

        assert!(Vocabulary::from_json_str(r#"{ "ponies": 1 }"#).is_err());
        assert!(Vocabulary::from_json_str("[]").is_err());
    }

    #[test]
    fn test_load_from_files() {
        let mut voc = NamedTempFile::new().unwrap();
        writeln!(voc, "relational\nfeed").unwrap();
        let mut output = NamedTempFile::new().unwrap();
        writeln!(output, "relat\nfeed").unwrap();

        let vocabulary = Vocabulary::load(voc.path(), Some(output.path())).unwrap();
        assert!(vocabulary.verify(&PorterStemmer::new()).is_success());

        let mut json = Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{ "agreed": "agre" }}"#).unwrap();
        let vocabulary = Vocabulary::load(json.path(), None).unwrap();
        assert_eq!(vocabulary.entries()[0].expected, "agre");

        let mut text = NamedTempFile::new().unwrap();
        writeln!(text, "hopping hop").unwrap();
        assert_eq!(Vocabulary::load(text.path(), None).unwrap().len(), 1);
    }
}
