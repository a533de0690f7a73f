//! Punctuation vocabulary.
//!
//! Separators and delimiters of the language. `"` is listed here as the string-constant quote even
//! though it never appears as a parse-tree node of its own.
//!
//! ## Examples
//! ```rust
//! use proclang_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_char(PunctuationId::LParen), '(');
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Semicolon,
    Comma,
    Colon,
    LParen,
    RParen,
    Quote,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    PunctuationInfo { id: PunctuationId::Semicolon, canonical: ";" },
    PunctuationInfo { id: PunctuationId::Comma, canonical: "," },
    PunctuationInfo { id: PunctuationId::Colon, canonical: ":" },
    PunctuationInfo { id: PunctuationId::LParen, canonical: "(" },
    PunctuationInfo { id: PunctuationId::RParen, canonical: ")" },
    PunctuationInfo { id: PunctuationId::Quote, canonical: "\"" },
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.canonical)
        .expect("INVARIANT: every PunctuationId has a registry entry")
}

/// Return the spelling as a single character (all punctuation is one character wide).
pub fn as_char(id: PunctuationId) -> char {
    match id {
        PunctuationId::Semicolon => ';',
        PunctuationId::Comma => ',',
        PunctuationId::Colon => ':',
        PunctuationId::LParen => '(',
        PunctuationId::RParen => ')',
        PunctuationId::Quote => '"',
    }
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}
