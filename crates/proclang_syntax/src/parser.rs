//! Recursive-descent grammar engine for the `procedure` language
//!
//! One method per nonterminal, each consuming exactly the input its nonterminal owns and returning
//! one [`ParseNode`]:
//!
//! ```text
//! Program      := 'procedure' Id ';' 'begin' Descriptions Operators 'end'
//! Descriptions := ('var' DescrList)?
//! DescrList    := Descr ( 'var' Descr )*
//! Descr        := VarList ':' Type ';'
//! VarList      := Id ( ',' Id )*
//! Type         := 'integer' | 'char'
//! Operators    := Op+
//! Op           := Id ':=' Value ( ('+'|'-') Value )? ';'
//! Value        := StringConst | Number | NumExpr
//! NumExpr      := SimpleExpr ( ('+'|'-') SimpleExpr )*
//! SimpleExpr   := Id | Number | '(' NumExpr ')'
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use proclang_syntax::parser;
//!
//! let tree = parser::parse("procedure p; begin var x: integer; x := 1 + 2; end").unwrap();
//! assert!(tree.find("Descr").is_some());
//! ```

use crate::diagnostics::ParseError;
use crate::lexer::Cursor;
use crate::tree::{Nonterminal, ParseNode, Span};
use proclang_core::lang::categories::Category;
use proclang_core::lang::chars;
use proclang_core::lang::keywords::{self, KeywordId, TYPE_NAMES};
use proclang_core::lang::operators::{self, OperatorId};
use proclang_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all grammar
// methods in the same Rust module (preserving privacy + call patterns) while keeping each
// grammar area in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
