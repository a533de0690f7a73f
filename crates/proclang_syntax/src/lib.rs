//! Syntax frontend for the `procedure` toy language: scanner, grammar engine, parse tree, diagnostics.
//!
//! There is no separate tokenization pass. Each grammar function pulls exactly the lexeme it expects
//! from a shared [`lexer::Cursor`], choosing its production from a one-character (or fixed-substring)
//! lookahead on the raw text.
//!
//! ## Notes
//! - This crate is "syntax-only": no type checking, no scope resolution.
//! - Parsing stops at the first violation; there is no recovery and no partial tree.
//! - Vocabulary (keywords/punctuation/operators/categories) comes from `proclang_core::lang`.
//!
//! ## Examples
//! ```rust
//! let tree = proclang_syntax::parse("procedure p; begin x := 1; end").unwrap();
//! assert_eq!(tree.label(), "Program");
//! assert_eq!(tree.children().len(), 7);
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use diagnostics::{ErrorKind, ParseError};
pub use parser::parse;
pub use proclang_core::lang::categories::Category;
pub use tree::{Nonterminal, ParseNode, Span};
