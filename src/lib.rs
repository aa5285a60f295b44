//! # porter-stem
//!
//! A deterministic implementation of the Porter stemming algorithm for English,
//! for normalizing word forms in search and indexing pipelines.
//!
//! ## Features
//!
//! - Pure, total `stem` function over any input string
//! - Static rule tables with longest-suffix selection
//! - Optional per-phase tracing hook
//! - Memoizing wrapper, parallel batches, and async entry points
//! - Token-stream filter and a small CLI
//!
//! ```
//! assert_eq!(porter_stem::stem("generalization"), "gener");
//! assert_eq!(porter_stem::stem("Run-ning!"), "run");
//! ```

pub mod analysis;
pub mod batch;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod nonblocking;
pub mod porter;
pub mod stemmer;
pub mod vocabulary;

pub use porter::{PorterStemmer, stem};
pub use stemmer::Stemmer;

pub mod prelude {
    pub use crate::analysis::{Filter, StemFilter, Token, TokenStream};
    pub use crate::batch::stem_batch;
    pub use crate::cache::CachedStemmer;
    pub use crate::config::StemmerConfig;
    pub use crate::error::{Result, StemError};
    pub use crate::nonblocking::{stem_all_async, stem_async};
    pub use crate::porter::{Phase, PhaseObserver, PorterStemmer, StemTrace, stem};
    pub use crate::stemmer::{Stemmer, build_stemmer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
