//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, StemArgs};
use crate::error::Result;
use crate::porter::StemTrace;
use crate::vocabulary::VerificationReport;

/// Results that know how to print themselves for humans.
pub trait HumanReadable {
    /// Render as plain text lines.
    fn to_human(&self, args: &StemArgs) -> String;
}

/// A single stemmed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemResult {
    pub word: String,
    pub stem: String,
}

/// Result of the `stem` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemResults {
    pub stemmer: String,
    pub results: Vec<StemResult>,
}

/// A stemmed token from running text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResult {
    pub position: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    pub text: String,
    pub stem: String,
}

/// Result of the `text` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResults {
    pub tokens: Vec<TokenResult>,
}

/// Result of the `trace` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceResult {
    pub word: String,
    pub stem: String,
    pub trace: StemTrace,
    #[serde(skip)]
    pub changes_only: bool,
}

/// Result of the `verify` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResult {
    #[serde(flatten)]
    pub report: VerificationReport,
    #[serde(skip)]
    pub max_mismatches: usize,
}

impl HumanReadable for StemResults {
    fn to_human(&self, args: &StemArgs) -> String {
        let mut out = String::new();
        for result in &self.results {
            if args.verbosity() > 1 {
                let _ = writeln!(out, "{} -> {}", result.word, result.stem);
            } else {
                let _ = writeln!(out, "{}", result.stem);
            }
        }
        out
    }
}

impl HumanReadable for TextResults {
    fn to_human(&self, args: &StemArgs) -> String {
        let mut out = String::new();
        if args.verbosity() > 1 {
            for token in &self.tokens {
                let _ = writeln!(
                    out,
                    "{:>4} [{}..{}] {} -> {}",
                    token.position, token.start_offset, token.end_offset, token.text, token.stem
                );
            }
        } else {
            let stems: Vec<&str> = self.tokens.iter().map(|t| t.stem.as_str()).collect();
            let _ = writeln!(out, "{}", stems.join(" "));
        }
        out
    }
}

impl HumanReadable for TraceResult {
    fn to_human(&self, _args: &StemArgs) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} -> {}", self.word, self.stem);
        let _ = writeln!(out, "─────────────");
        for step in &self.trace.steps {
            if self.changes_only && !step.changed() {
                continue;
            }
            let marker = if step.changed() { "*" } else { " " };
            let _ = writeln!(out, "{marker} {:<24} {}", step.phase.name(), step.output);
        }
        out
    }
}

impl HumanReadable for VerifyResult {
    fn to_human(&self, _args: &StemArgs) -> String {
        let report = &self.report;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}: {}/{} words match",
            report.stemmer, report.passed, report.total
        );
        for mismatch in report.mismatches.iter().take(self.max_mismatches) {
            let _ = writeln!(
                out,
                "  {}: expected {}, got {}",
                mismatch.word, mismatch.expected, mismatch.actual
            );
        }
        let hidden = report.mismatches.len().saturating_sub(self.max_mismatches);
        if hidden > 0 {
            let _ = writeln!(out, "  ... and {hidden} more");
        }
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanReadable>(result: &T, args: &StemArgs) -> Result<()> {
    print!("{}", render(result, args)?);
    Ok(())
}

/// Render a result in the specified format.
pub fn render<T: Serialize + HumanReadable>(result: &T, args: &StemArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.to_human(args)),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(format!("{json}\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::porter::stem_traced;
    use crate::vocabulary::Mismatch;

    fn args(extra: &[&str]) -> StemArgs {
        let mut argv = vec!["porter-stem"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["stem", "x"]);
        StemArgs::try_parse_from(argv).unwrap()
    }

    fn stems() -> StemResults {
        StemResults {
            stemmer: "porter".to_string(),
            results: vec![StemResult {
                word: "ponies".to_string(),
                stem: "poni".to_string(),
            }],
        }
    }

    #[test]
    fn test_human_stem_output() {
        assert_eq!(render(&stems(), &args(&[])).unwrap(), "poni\n");
        assert_eq!(render(&stems(), &args(&["-vv"])).unwrap(), "ponies -> poni\n");
    }

    #[test]
    fn test_json_stem_output() {
        let json = render(&stems(), &args(&["-f", "json"])).unwrap();
        assert_eq!(
            json,
            "{\"stemmer\":\"porter\",\"results\":[{\"word\":\"ponies\",\"stem\":\"poni\"}]}\n"
        );
    }

    #[test]
    fn test_trace_output_marks_changes() {
        let trace = stem_traced("cats");
        let result = TraceResult {
            word: "cats".to_string(),
            stem: "cat".to_string(),
            trace,
            changes_only: true,
        };
        let out = render(&result, &args(&[])).unwrap();
        assert!(out.starts_with("cats -> cat\n"));
        assert!(out.contains("* plural"));
        assert!(!out.contains("normalize"));
    }

    #[test]
    fn test_verify_output_truncates_mismatches() {
        let mismatch = Mismatch {
            word: "w".to_string(),
            expected: "e".to_string(),
            actual: "a".to_string(),
        };
        let result = VerifyResult {
            report: VerificationReport {
                stemmer: "porter".to_string(),
                total: 3,
                passed: 0,
                mismatches: vec![mismatch.clone(), mismatch.clone(), mismatch],
            },
            max_mismatches: 1,
        };
        let out = render(&result, &args(&[])).unwrap();
        assert!(out.contains("porter: 0/3 words match"));
        assert!(out.contains("... and 2 more"));

        let json = render(&result, &args(&["-f", "json"])).unwrap();
        assert!(json.contains("\"total\":3"));
    }
}
