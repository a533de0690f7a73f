//! Operator vocabulary: assignment and the two additive operators.
//!
//! ## Examples
//! ```rust
//! use proclang_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::as_str(OperatorId::Assign), ":=");
//! assert_eq!(operators::additive_from_char('-'), Some(OperatorId::Minus));
//! assert_eq!(operators::additive_from_char('*'), None);
//! ```

/// Stable identifier for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Assign,
    Plus,
    Minus,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    /// `true` for `+` and `-`, which join operands in `Op` and `NumExpr`.
    pub additive: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    OperatorInfo { id: OperatorId::Assign, canonical: ":=", additive: false },
    OperatorInfo { id: OperatorId::Plus, canonical: "+", additive: true },
    OperatorInfo { id: OperatorId::Minus, canonical: "-", additive: true },
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .map(|o| o.canonical)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

/// Classify a single character as an additive operator (`+` or `-`).
pub fn additive_from_char(c: char) -> Option<OperatorId> {
    match c {
        '+' => Some(OperatorId::Plus),
        '-' => Some(OperatorId::Minus),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_flag_matches_char_lookup() {
        for o in OPERATORS {
            let first = o.canonical.chars().next().unwrap();
            let single_char = o.canonical.chars().count() == 1;
            assert_eq!(o.additive, single_char && additive_from_char(first) == Some(o.id));
        }
    }
}
