/// Deepest parenthesized `SimpleExpr` nesting accepted before the parse is abandoned.
///
/// Grammar functions recurse once per level, and so do tree drop and rendering.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parser core type and entrypoint.
///
/// ## Notes
/// - The parser owns the only cursor of the parse attempt; nothing is shared between parses.
/// - The first error aborts the attempt. No recovery, no partial tree.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Open parentheses enclosing the current position.
    nesting: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            nesting: 0,
        }
    }

    /// Parse the whole source as one `Program`.
    ///
    /// ## Errors
    /// Returns the first lexical or syntax error. Text left after `end` (other than whitespace) is a
    /// syntax error, and no tree is returned in that case either.
    pub fn parse(mut self) -> Result<ParseNode, ParseError> {
        let program = self.program()?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            let start = self.cursor.position();
            let end = self.cursor.source().len();
            return Err(ParseError::syntax(
                format!("Unexpected trailing input after '{}'", keywords::as_str(KeywordId::End)),
                Span::new(start, end),
            )
            .with_help("the program must end with its closing 'end'"));
        }

        Ok(program)
    }
}
