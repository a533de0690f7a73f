//! Identifier and number scanning
//!
//! Both scanners consume greedily up to the next delimiter and only then validate the whole lexeme
//! against its character class. A lexeme mixing classes (`x1`, `12ab`) is rejected as a whole rather
//! than split at the class boundary.

use proclang_core::lang::chars;

use super::Cursor;
use crate::diagnostics::ParseError;
use crate::tree::Span;

/// A scanned lexeme borrowed from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Cursor<'a> {
    /// Skip whitespace, then consume up to (not including) the next delimiter.
    fn take_lexeme(&mut self) -> Lexeme<'a> {
        self.skip_whitespace();
        let start = self.pos;
        while self.peek().is_some_and(|c| !chars::is_delimiter(c)) {
            self.bump();
        }
        Lexeme {
            text: &self.source[start..self.pos],
            span: Span::new(start, self.pos),
        }
    }

    /// Scan an identifier: letters only.
    ///
    /// ## Errors
    /// - syntax error if no lexeme starts here (delimiter or end of input)
    /// - lexical error if any character of the lexeme is not a letter
    pub fn read_identifier(&mut self) -> Result<Lexeme<'a>, ParseError> {
        let lexeme = self.take_lexeme();
        if lexeme.text.is_empty() {
            return Err(ParseError::syntax("Expected identifier", self.upcoming_span()).with_help(self.found_note()));
        }
        if let Some(bad) = lexeme.text.chars().find(|c| !chars::is_letter(*c)) {
            tracing::debug!(lexeme = lexeme.text, "invalid identifier");
            return Err(ParseError::lexical(
                format!("Invalid identifier: '{}' must consist of letters only", lexeme.text),
                lexeme.span,
            )
            .with_help(format!("'{}' is not a letter", bad.escape_default())));
        }
        Ok(lexeme)
    }

    /// Scan a number: decimal digits only.
    ///
    /// ## Errors
    /// - syntax error if no lexeme starts here
    /// - lexical error if any character of the lexeme is not a digit
    pub fn read_number(&mut self) -> Result<Lexeme<'a>, ParseError> {
        let lexeme = self.take_lexeme();
        if lexeme.text.is_empty() {
            return Err(ParseError::syntax("Expected number", self.upcoming_span()).with_help(self.found_note()));
        }
        if let Some(bad) = lexeme.text.chars().find(|c| !chars::is_digit(*c)) {
            tracing::debug!(lexeme = lexeme.text, "invalid number");
            return Err(ParseError::lexical(
                format!("Invalid number: '{}' contains invalid characters", lexeme.text),
                lexeme.span,
            )
            .with_help(format!("'{}' is not a decimal digit", bad.escape_default())));
        }
        Ok(lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_stops_at_delimiters() {
        for (src, expected) in [("abc;", "abc"), ("x:=1", "x"), ("ab,c", "ab"), ("q)", "q"), ("y+z", "y")] {
            let mut cur = Cursor::new(src);
            assert_eq!(cur.read_identifier().unwrap().text, expected, "source {src:?}");
        }
    }

    #[test]
    fn test_identifier_with_digit_rejected_whole() {
        let mut cur = Cursor::new("  x1 := 2;");
        let err = cur.read_identifier().unwrap_err();
        assert!(err.is_lexical());
        assert!(err.message.contains("'x1'"));
        assert_eq!(err.span, Span::new(2, 4));
        // Greedy consumption happened before validation.
        assert_eq!(cur.position(), 4);
    }

    #[test]
    fn test_identifier_with_quote_rejected() {
        let mut cur = Cursor::new("a\"b\";");
        assert!(cur.read_identifier().unwrap_err().message.contains("a\"b\""));
    }

    #[test]
    fn test_empty_identifier_is_syntax_error() {
        let mut cur = Cursor::new("   ;");
        let err = cur.read_identifier().unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.message, "Expected identifier");
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn test_number_accepts_digits_only() {
        let mut cur = Cursor::new("0042+1");
        let lexeme = cur.read_number().unwrap();
        assert_eq!(lexeme.text, "0042");
        assert_eq!(lexeme.span, Span::new(0, 4));
    }

    #[test]
    fn test_number_with_letter_rejected() {
        let mut cur = Cursor::new("12ab;");
        let err = cur.read_number().unwrap_err();
        assert!(err.is_lexical());
        assert!(err.message.starts_with("Invalid number: '12ab'"));
    }

    #[test]
    fn test_non_ascii_identifier_rejected() {
        let mut cur = Cursor::new("πr;");
        let err = cur.read_identifier().unwrap_err();
        assert!(err.is_lexical());
        assert_eq!(err.span, Span::new(0, "πr".len()));
    }
}
