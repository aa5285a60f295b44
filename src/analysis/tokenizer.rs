//! Unicode word tokenizer.
//!
//! Splits text on Unicode word boundaries (UAX #29) and drops punctuation and
//! whitespace segments. The stemmer never tokenizes on its own; this exists for
//! callers such as the CLI that start from running text.
//!
//! # Examples
//!
//! ```
//! use porter_stem::analysis::tokenizer::UnicodeWordTokenizer;
//!
//! let tokens: Vec<_> = UnicodeWordTokenizer::new().tokenize("Hello, world!").collect();
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[1].start_offset, 7);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    /// Tokenize `text` into a token stream.
    pub fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .unicode_word_indices()
            .enumerate()
            .map(|(position, (start, word))| {
                Token::with_offsets(word, position, start, start + word.len())
            })
            .collect();

        Box::new(tokens.into_iter())
    }
}
