//! Character classes used by the scanner.
//!
//! Lexemes are scanned greedily up to the next delimiter and only then validated against a class,
//! so the delimiter set (not the letter/digit classes) decides where a lexeme ends.
//!
//! ## Examples
//! ```rust
//! use proclang_core::lang::chars;
//!
//! assert!(chars::is_delimiter(';'));
//! assert!(chars::is_delimiter('\n'));
//! assert!(!chars::is_delimiter('1'));
//! assert!(chars::is_letter('q') && !chars::is_letter('7'));
//! ```

/// Non-whitespace characters that end a greedy lexeme without being part of it.
pub const DELIMITERS: &[char] = &[';', ',', ':', '+', '-', '=', '(', ')'];

/// Whitespace skipped before every token attempt: ASCII whitespace plus vertical tab.
pub fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Return `true` if `c` terminates a greedy lexeme.
pub fn is_delimiter(c: char) -> bool {
    is_whitespace(c) || DELIMITERS.contains(&c)
}

/// Identifier character class.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Number character class.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Characters permitted between the quotes of a string constant.
pub fn is_string_char(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_quotes_are_not_delimiters() {
        for c in ['0', '9', '"', 'a', '_', '.'] {
            assert!(!is_delimiter(c), "{c:?} must not end a lexeme");
        }
    }

    #[test]
    fn test_whitespace_variants_are_delimiters() {
        for c in [' ', '\t', '\n', '\r', '\x0b', '\x0c'] {
            assert!(is_whitespace(c), "{c:?} must be whitespace");
            assert!(is_delimiter(c));
        }
    }

    #[test]
    fn test_non_ascii_letters_are_rejected() {
        assert!(!is_letter('é'));
        assert!(!is_string_char('π'));
    }
}
