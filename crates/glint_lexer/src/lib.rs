//! Language-agnostic heuristic lexer for syntax highlighting.
//!
//! Splits source bytes into classified tokens (whitespace, strings, keywords,
//! comments, type names, punctuation, identifiers, decimals) without knowing
//! which language the source is written in. The rules approximate C-family,
//! Go, Java, JavaScript, Python and Ruby closely enough for presentation; they
//! are not a grammar.
//!
//! # Layers
//!
//! - [`classify`]: stateless code point predicates and permissive UTF-8 decoding
//! - [`KeywordSet`]: exact-match keyword membership, replaceable
//! - [`Tokenizer`]: the incremental state machine, one token per call
//! - [`Tokens`] / [`StreamScanner`]: drivers over in-memory and streaming input
//!
//! Renderers live outside this crate and only see `(offset, Token)` pairs.
//!
//! # Example
//!
//! ```
//! use glint_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize(b"if(x)").map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::Punctuation,
//!         TokenKind::PlainText,
//!         TokenKind::Punctuation,
//!     ]
//! );
//! ```

pub mod classify;
mod cursor;
mod error;
mod keywords;
mod kind;
mod stream;
mod tokenizer;
mod window;

pub use error::ScanError;
pub use keywords::{KeywordSet, DEFAULT_KEYWORDS};
pub use kind::{Token, TokenKind};
pub use stream::{tokenize, StreamScanner, Tokens, WithOffsets, DEFAULT_CAPACITY};
pub use tokenizer::{ScanState, Step, Tokenizer};
pub use window::SourceWindow;
