//! Parse-tree node categories.
//!
//! Every terminal node of a parse tree carries one of these tags; structural nonterminals
//! (`Descriptions`, `Expr`, ...) are untagged. The display spellings are part of the tree's
//! printed form and are kept verbatim (including the underscores).
//!
//! ## Examples
//! ```rust
//! use proclang_core::lang::categories::Category;
//!
//! assert_eq!(Category::WordsKey.as_str(), "WordsKey");
//! assert_eq!(Category::from_str("Symbols_of_Operation"), Some(Category::SymbolsOfOperation));
//! ```

use std::fmt;

/// Classification tag of a parse-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The root node.
    Program,
    /// Reserved words, including type names.
    WordsKey,
    /// Identifiers.
    Id,
    /// Numeric and string constants.
    Const,
    /// `;`, `,`, `:`, `(`, `)`.
    SymbolsOfSeparating,
    /// `:=`, `+`, `-`.
    SymbolsOfOperation,
}

/// All categories, in display order.
pub const CATEGORIES: &[Category] = &[
    Category::Program,
    Category::WordsKey,
    Category::Id,
    Category::Const,
    Category::SymbolsOfSeparating,
    Category::SymbolsOfOperation,
];

impl Category {
    /// Printed spelling of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Program => "Program",
            Category::WordsKey => "WordsKey",
            Category::Id => "Id",
            Category::Const => "Const",
            Category::SymbolsOfSeparating => "Symbols_of_Separating",
            Category::SymbolsOfOperation => "Symbols_of_Operation",
        }
    }

    /// Resolve a printed spelling back to a category.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Category> {
        CATEGORIES.iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_display_uses_printed_spelling() {
        assert_eq!(Category::SymbolsOfSeparating.to_string(), "Symbols_of_Separating");
    }
}
