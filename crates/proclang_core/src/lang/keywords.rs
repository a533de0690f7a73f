//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`])
//! plus a const metadata table ([`KEYWORDS`]) recording canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - The recognizer matches keywords as fixed-length prefixes of the upcoming text, so a keyword is
//!   recognized even when letters follow it directly (`procedurex` reads as `procedure` then `x`).
//!
//! ## Examples
//! ```rust
//! use proclang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("integer"), Some(KeywordId::Integer));
//! assert_eq!(keywords::as_str(KeywordId::Procedure), "procedure");
//! assert!(keywords::from_str("Begin").is_none());
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Procedure,
    Begin,
    End,

    // Declarations
    Var,

    // Type names
    Integer,
    Char,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// `procedure`, `begin`, `end`.
    Structure,
    /// `var`.
    Declaration,
    /// `integer`, `char`.
    TypeName,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Procedure, "procedure", KeywordCategory::Structure),
    info(KeywordId::Begin, "begin", KeywordCategory::Structure),
    info(KeywordId::End, "end", KeywordCategory::Structure),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    info(KeywordId::Integer, "integer", KeywordCategory::TypeName),
    info(KeywordId::Char, "char", KeywordCategory::TypeName),
];

/// Type names accepted by the `Type` production, in the order they are tried.
pub const TYPE_NAMES: &[KeywordId] = &[KeywordId::Integer, KeywordId::Char];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Resolve a spelling to a keyword id, if reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
