#![forbid(unsafe_code)]
//! proclang: a recognizer for the `procedure` toy language
//!
//! This crate provides the command-line front end and parse tree rendering. The grammar itself lives
//! in `proclang_syntax`; the shared vocabulary (keywords, punctuation, operators, categories) lives in
//! `proclang_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod render;
pub mod version;

pub use proclang_syntax::diagnostics;
pub use proclang_syntax::{Category, ErrorKind, Nonterminal, ParseError, ParseNode, Span, parse};

pub use render::{OutputFormat, RenderConfig, render, render_json, render_tokens, render_tree};
