//! Token types for feeding stemmers from a tokenizer.
//!
//! # Examples
//!
//! ```
//! use porter_stem::analysis::token::Token;
//!
//! let token = Token::with_offsets("Connections", 1, 4, 15);
//! assert_eq!(token.text, "Connections");
//! assert_eq!(token.start_offset, 4);
//! assert!(!token.is_stopped());
//! ```

use serde::{Deserialize, Serialize};

/// A single word produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped by an earlier stage
    pub stopped: bool,

    /// The text before stemming, set by [`StemFilter`](super::stem_filter::StemFilter)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

/// A boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
            original_text: None,
        }
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the text, remembering the previous text as the original.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        let previous = std::mem::replace(&mut self.text, text.into());
        if self.original_text.is_none() {
            self.original_text = Some(previous);
        }
        self
    }
}
