//! Cursor and lexical scanner
//!
//! The scanner owns the read position into the source text. It has no token stream: grammar functions
//! ask it for exactly the lexeme they expect, at the point they expect it.
//!
//! Every scanning primitive skips whitespace first. Literal tokens (keywords, punctuation, operators)
//! are matched as exact substrings of the upcoming text.
//!
//! ## Module Structure
//!
//! - `lexemes` - greedy identifier/number scanning with after-the-fact validation
//! - `strings` - quoted string constants

mod lexemes;
mod strings;

pub use lexemes::Lexeme;

use proclang_core::lang::chars;
use proclang_core::lang::keywords::{self, KeywordId};
use proclang_core::lang::operators::{self, OperatorId};
use proclang_core::lang::punctuation::{self, PunctuationId};

use crate::diagnostics::ParseError;
use crate::tree::Span;

/// Read position into an immutable source text.
///
/// ## Notes
/// - `pos` is a byte offset that only moves forward and always sits on a char boundary.
/// - A successful match always advances `pos`; empty matches are reported as errors.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Unconsumed text.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// The next character, without skipping whitespace.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    // ========================================================================
    // Whitespace and lookahead
    // ========================================================================

    /// Advance past consecutive whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(chars::is_whitespace) {
            self.bump();
        }
    }

    /// Skip whitespace, then return the next character without consuming it.
    pub fn lookahead(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.peek()
    }

    /// Skip whitespace, then report whether the upcoming text starts with `token`.
    pub fn at_literal(&mut self, token: &str) -> bool {
        self.skip_whitespace();
        !token.is_empty() && self.rest().starts_with(token)
    }

    pub fn at_keyword(&mut self, id: KeywordId) -> bool {
        self.at_literal(keywords::as_str(id))
    }

    pub fn at_punct(&mut self, id: PunctuationId) -> bool {
        self.at_literal(punctuation::as_str(id))
    }

    // ========================================================================
    // Literal matching
    // ========================================================================

    /// Skip whitespace, then consume `token` exactly.
    ///
    /// ## Errors
    /// A syntax error naming the expected token, reported where it should have started.
    pub fn match_literal(&mut self, token: &str) -> Result<Span, ParseError> {
        self.expect_literal(token, &format!("Expected '{token}'"))
    }

    /// Like [`Cursor::match_literal`] but with a caller-supplied message.
    pub fn expect_literal(&mut self, token: &str, message: &str) -> Result<Span, ParseError> {
        if token.is_empty() {
            return Err(ParseError::syntax("Cannot match an empty token", Span::at(self.pos)));
        }
        if self.at_literal(token) {
            let start = self.pos;
            self.pos += token.len();
            return Ok(Span::new(start, self.pos));
        }
        tracing::debug!(expected = token, pos = self.pos, "literal mismatch");
        Err(ParseError::syntax(message, self.upcoming_span()).with_help(self.found_note()))
    }

    pub fn match_keyword(&mut self, id: KeywordId) -> Result<Span, ParseError> {
        self.match_literal(keywords::as_str(id))
    }

    pub fn match_punct(&mut self, id: PunctuationId) -> Result<Span, ParseError> {
        self.match_literal(punctuation::as_str(id))
    }

    pub fn match_op(&mut self, id: OperatorId) -> Result<Span, ParseError> {
        self.match_literal(operators::as_str(id))
    }

    // ========================================================================
    // Error context
    // ========================================================================

    /// Span of the next character (zero-width at end of input).
    pub fn upcoming_span(&self) -> Span {
        let width = self.peek().map(char::len_utf8).unwrap_or(0);
        Span::new(self.pos, self.pos + width)
    }

    /// Short description of what sits at the cursor, for help text.
    pub fn found_note(&self) -> String {
        match self.peek() {
            Some(c) => format!("found '{}'", c.escape_default()),
            None => "found end of input".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace_mixed() {
        let mut cur = Cursor::new(" \t\r\n x");
        cur.skip_whitespace();
        assert_eq!(cur.position(), 5);
        assert_eq!(cur.peek(), Some('x'));
    }

    #[test]
    fn test_match_literal_advances_past_token() {
        let mut cur = Cursor::new("   begin x");
        let span = cur.match_keyword(KeywordId::Begin).unwrap();
        assert_eq!(span, Span::new(3, 8));
        assert_eq!(cur.position(), 8);
    }

    #[test]
    fn test_match_literal_is_prefix_match() {
        let mut cur = Cursor::new("procedurex;");
        cur.match_keyword(KeywordId::Procedure).unwrap();
        assert_eq!(cur.rest(), "x;");
    }

    #[test]
    fn test_match_literal_failure_reports_position_after_whitespace() {
        let mut cur = Cursor::new("  begin");
        let err = cur.match_punct(PunctuationId::Semicolon).unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.message, "Expected ';'");
        assert_eq!(err.offset(), 2);
        assert_eq!(err.help.as_deref(), Some("found 'b'"));
    }

    #[test]
    fn test_match_at_end_of_input() {
        let mut cur = Cursor::new("x := 1;  ");
        cur.pos = 7;
        let err = cur.match_keyword(KeywordId::End).unwrap_err();
        assert_eq!(err.offset(), 9);
        assert_eq!(err.help.as_deref(), Some("found end of input"));
    }

    #[test]
    fn test_empty_token_is_an_error_not_a_stall() {
        let mut cur = Cursor::new("abc");
        assert!(cur.match_literal("").is_err());
        assert_eq!(cur.position(), 0);
        assert!(!cur.at_literal(""));
    }

    #[test]
    fn test_lookahead_does_not_consume() {
        let mut cur = Cursor::new("  := 1");
        assert_eq!(cur.lookahead(), Some(':'));
        cur.match_op(OperatorId::Assign).unwrap();
        assert_eq!(cur.lookahead(), Some('1'));
    }
}
