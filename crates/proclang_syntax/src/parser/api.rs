/// Parse a complete source text into its parse tree.
///
/// This is the main public entrypoint for parsing. Each call gets its own cursor, so independent
/// parses may run concurrently.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered; no partial tree is produced.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<ParseNode, ParseError> {
    Parser::new(source).parse()
}
