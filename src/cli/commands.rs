//! Command implementations for the porter-stem CLI.

use std::io::{self, BufRead, Read};
use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::{Filter, StemFilter, UnicodeWordTokenizer};
use crate::batch::stem_batch_with_threshold;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::StemmerConfig;
use crate::error::{Result, StemError};
use crate::porter::{PorterStemmer, StemTrace};
use crate::stemmer::{Stemmer, build_stemmer};
use crate::vocabulary::Vocabulary;

/// Execute a CLI command.
pub fn execute_command(args: StemArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Stem(stem_args) => stem_words(stem_args, &config, &args),
        Command::Text(text_args) => stem_text(text_args, &config, &args),
        Command::Trace(trace_args) => trace_word(trace_args, &config, &args),
        Command::Verify(verify_args) => verify_vocabulary(verify_args, &config, &args),
    }
}

/// Load the configuration file if one was given.
fn load_config(args: &StemArgs) -> Result<StemmerConfig> {
    match &args.config {
        Some(path) => StemmerConfig::from_file(path),
        None => Ok(StemmerConfig::default()),
    }
}

/// Stem words from the command line or stdin.
fn stem_words(args: &StemWordsArgs, config: &StemmerConfig, cli_args: &StemArgs) -> Result<()> {
    let words = if args.words.is_empty() {
        read_words(io::stdin().lock())?
    } else {
        args.words.clone()
    };

    let stemmer = build_stemmer(config)?;
    let result = run_stem(stemmer.as_ref(), &words, config.parallel_threshold);
    debug!(words = words.len(), "stemmed words");

    output_result(&result, cli_args)
}

/// Stem `words` into a result set.
pub fn run_stem(stemmer: &dyn Stemmer, words: &[String], parallel_threshold: usize) -> StemResults {
    let stems = stem_batch_with_threshold(stemmer, words, parallel_threshold);
    StemResults {
        stemmer: stemmer.name().to_string(),
        results: words
            .iter()
            .zip(stems)
            .map(|(word, stem)| StemResult {
                word: word.clone(),
                stem,
            })
            .collect(),
    }
}

/// Read whitespace-separated words.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(words)
}

/// Tokenize running text and stem each word.
fn stem_text(args: &TextArgs, config: &StemmerConfig, cli_args: &StemArgs) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let stemmer = build_stemmer(config)?;
    let result = run_text(stemmer, &text);
    output_result(&result, cli_args)
}

/// Tokenize `text` and run the tokens through a [`StemFilter`].
pub fn run_text(stemmer: Arc<dyn Stemmer>, text: &str) -> TextResults {
    let tokens = UnicodeWordTokenizer::new().tokenize(text);
    let filter = StemFilter::with_stemmer(stemmer);

    TextResults {
        tokens: filter
            .filter(tokens)
            .map(|token| TokenResult {
                position: token.position,
                start_offset: token.start_offset,
                end_offset: token.end_offset,
                text: token.original_text.unwrap_or_else(|| token.text.clone()),
                stem: token.text,
            })
            .collect(),
    }
}

/// Show every phase for one word.
fn trace_word(args: &TraceArgs, config: &StemmerConfig, cli_args: &StemArgs) -> Result<()> {
    config.validate()?;
    let stemmer = PorterStemmer::from_config(config);

    let mut trace = StemTrace::new();
    let stem = stemmer.stem_with_observer(&args.word, &mut trace);

    let result = TraceResult {
        word: args.word.clone(),
        stem,
        trace,
        changes_only: args.changes_only,
    };
    output_result(&result, cli_args)
}

/// Verify against a reference vocabulary.
fn verify_vocabulary(args: &VerifyArgs, config: &StemmerConfig, cli_args: &StemArgs) -> Result<()> {
    let vocabulary = match &args.vocabulary {
        Some(path) => Vocabulary::load(path, args.expected.as_deref())?,
        None => Vocabulary::builtin(),
    };
    if vocabulary.is_empty() {
        return Err(StemError::vocabulary("vocabulary is empty"));
    }

    let stemmer = build_stemmer(config)?;
    let report = vocabulary.verify(stemmer.as_ref());
    let success = report.is_success();
    info!(mismatches = report.mismatches.len(), "verification complete");

    output_result(
        &VerifyResult {
            report,
            max_mismatches: args.max_mismatches,
        },
        cli_args,
    )?;

    if success {
        Ok(())
    } else {
        Err(StemError::vocabulary("stemmer output differs from the reference"))
    }
}
