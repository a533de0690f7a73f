//! Provide the canonical vocabulary of the `procedure` toy language.
//!
//! This crate is intentionally tiny and dependency-free. It owns every spelling the recognizer matches
//! (keywords, punctuation, operators), the character classes used by the scanner, and the fixed set of
//! parse-tree categories.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no parser types.
//! - The syntax crate enforces the grammar; registries here only provide spellings and metadata.

pub mod lang;
