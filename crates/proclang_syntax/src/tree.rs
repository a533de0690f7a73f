//! Parse tree definitions.
//!
//! A [`ParseNode`] records which production was applied, in derivation order, down to the literal
//! tokens. Children are owned exclusively by their parent (a plain `Vec`), so the tree is a strict
//! forest with a single `Program` root and no sharing.

use proclang_core::lang::categories::Category;
use serde::{Serialize, Serializer};
use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    pub fn at(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Grammar nonterminals that appear as structural nodes in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nonterminal {
    Program,
    Descriptions,
    DescrList,
    Descr,
    VarList,
    Operators,
    Op,
    /// Printed as `Expr`.
    NumExpr,
    SimpleExpr,
}

impl Nonterminal {
    /// Display name used as the node label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Nonterminal::Program => "Program",
            Nonterminal::Descriptions => "Descriptions",
            Nonterminal::DescrList => "DescrList",
            Nonterminal::Descr => "Descr",
            Nonterminal::VarList => "VarList",
            Nonterminal::Operators => "Operators",
            Nonterminal::Op => "Op",
            Nonterminal::NumExpr => "Expr",
            Nonterminal::SimpleExpr => "SimpleExpr",
        }
    }
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the parse tree.
///
/// ## Notes
/// - `label` is either the concrete lexeme (`"integer"`, `":="`, `"x"`) or a nonterminal's display name.
/// - `category` is `None` for purely structural nonterminals (`Descriptions`, `Expr`, ...).
/// - `children` are in left-to-right production order and never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_category")]
    category: Option<Category>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ParseNode>,
}

fn serialize_category<S: Serializer>(category: &Option<Category>, serializer: S) -> Result<S::Ok, S::Error> {
    match category {
        Some(c) => serializer.serialize_str(c.as_str()),
        None => serializer.serialize_none(),
    }
}

impl ParseNode {
    /// A tagged leaf holding a concrete lexeme.
    pub fn terminal(label: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            category: Some(category),
            children: Vec::new(),
        }
    }

    /// An untagged structural node, children to be pushed by the grammar function building it.
    pub fn nonterminal(kind: Nonterminal) -> Self {
        Self {
            label: kind.as_str().to_string(),
            category: None,
            children: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Append a child. Only grammar functions call this, before the node is returned.
    pub(crate) fn push(&mut self, child: ParseNode) {
        self.children.push(child);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    /// Tagged and childless: a literal token or scanned lexeme.
    pub fn is_terminal(&self) -> bool {
        self.category.is_some() && self.children.is_empty()
    }

    /// Depth-first, pre-order walk yielding `(depth, node)` pairs, root at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![(0, self)] }
    }

    /// Terminal nodes in source order.
    pub fn terminals(&self) -> impl Iterator<Item = &ParseNode> {
        self.walk().map(|(_, n)| n).filter(|n| n.is_terminal())
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Height of this subtree (a lone node has depth 0).
    pub fn depth(&self) -> usize {
        self.walk().map(|(d, _)| d).max().unwrap_or(0)
    }

    /// First node (pre-order) carrying `label`.
    pub fn find(&self, label: &str) -> Option<&ParseNode> {
        self.walk().map(|(_, n)| n).find(|n| n.label == label)
    }
}

/// Pre-order iterator returned by [`ParseNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a ParseNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a ParseNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
