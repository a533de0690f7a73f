/// Terminal-building helpers.
///
/// Each helper consumes one token through the cursor and wraps it in a tagged leaf, so grammar
/// functions read as a sequence of `node.push(self.<terminal>()?)` calls.
impl<'a> Parser<'a> {
    fn keyword(&mut self, id: KeywordId) -> Result<ParseNode, ParseError> {
        self.cursor.match_keyword(id)?;
        Ok(ParseNode::terminal(keywords::as_str(id), Category::WordsKey))
    }

    fn punct(&mut self, id: PunctuationId) -> Result<ParseNode, ParseError> {
        self.cursor.match_punct(id)?;
        Ok(ParseNode::terminal(punctuation::as_str(id), Category::SymbolsOfSeparating))
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<ParseNode, ParseError> {
        self.cursor.expect_literal(punctuation::as_str(id), msg)?;
        Ok(ParseNode::terminal(punctuation::as_str(id), Category::SymbolsOfSeparating))
    }

    fn operator(&mut self, id: OperatorId) -> Result<ParseNode, ParseError> {
        self.cursor.match_op(id)?;
        Ok(ParseNode::terminal(operators::as_str(id), Category::SymbolsOfOperation))
    }

    fn identifier(&mut self) -> Result<ParseNode, ParseError> {
        let lexeme = self.cursor.read_identifier()?;
        Ok(ParseNode::terminal(lexeme.text, Category::Id))
    }

    fn number(&mut self) -> Result<ParseNode, ParseError> {
        let lexeme = self.cursor.read_number()?;
        Ok(ParseNode::terminal(lexeme.text, Category::Const))
    }

    fn string_const(&mut self) -> Result<ParseNode, ParseError> {
        let lexeme = self.cursor.read_string_const()?;
        Ok(ParseNode::terminal(lexeme.text, Category::Const))
    }

    /// If the next character is `+` or `-`, return which one (without consuming it).
    fn at_additive(&mut self) -> Option<OperatorId> {
        self.cursor.lookahead().and_then(operators::additive_from_char)
    }
}
