//! Token-stream integration.
//!
//! A minimal analysis layer so the stemmer can sit in an indexing pipeline:
//! a Unicode word tokenizer, a [`Token`](token::Token) type and a
//! [`StemFilter`](stem_filter::StemFilter).

pub mod stem_filter;
pub mod token;
pub mod tokenizer;

pub use stem_filter::{Filter, StemFilter};
pub use token::{Token, TokenStream};
pub use tokenizer::UnicodeWordTokenizer;
