//! Language vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up spellings via the
//! registry tables instead of scattering string literals across the parser.
//!
//! ## Examples
//! ```rust
//! use proclang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("begin"), Some(KeywordId::Begin));
//! assert_eq!(keywords::as_str(KeywordId::Begin), "begin");
//! ```

pub mod categories;
pub mod chars;
pub mod keywords;
pub mod operators;
pub mod punctuation;
