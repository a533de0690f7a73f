//! String constant scanning
//!
//! A string constant is `"` followed by letters and digits up to the closing `"`. Whitespace and
//! punctuation are not allowed inside the quotes.

use proclang_core::lang::chars;
use proclang_core::lang::punctuation::{self, PunctuationId};

use super::{Cursor, Lexeme};
use crate::diagnostics::ParseError;
use crate::tree::Span;

impl<'a> Cursor<'a> {
    /// Scan a quoted string constant; the returned text excludes the quotes, the span includes them.
    ///
    /// ## Errors
    /// - syntax error if the upcoming character is not `"`
    /// - lexical error at the first character that is neither a letter nor a digit
    /// - lexical error at end of input if the closing `"` is missing
    pub fn read_string_const(&mut self) -> Result<Lexeme<'a>, ParseError> {
        let quote = punctuation::as_char(PunctuationId::Quote);
        self.skip_whitespace();
        let open = self.pos;
        if self.peek() != Some(quote) {
            return Err(ParseError::syntax("Expected string constant", self.upcoming_span()).with_help(self.found_note()));
        }
        self.bump();
        let start = self.pos;

        loop {
            match self.peek() {
                None => {
                    tracing::debug!(open, "unterminated string constant");
                    return Err(ParseError::lexical("Unterminated string constant", Span::at(self.pos))
                        .with_help(format!("string constant opened at offset {open}")));
                }
                Some(c) if c == quote => {
                    let text = &self.source[start..self.pos];
                    self.bump();
                    return Ok(Lexeme {
                        text,
                        span: Span::new(open, self.pos),
                    });
                }
                Some(c) if chars::is_string_char(c) => {
                    self.bump();
                }
                Some(c) => {
                    return Err(ParseError::lexical(
                        format!("Invalid character '{}' in string constant", c.escape_default()),
                        self.upcoming_span(),
                    )
                    .with_help("string constants may only contain letters and digits"));
                }
            }
        }
    }
}
