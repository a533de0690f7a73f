/// Statements: `Operators`, `Op`, `Value`.
impl<'a> Parser<'a> {
    /// `Op+`: the body runs once before the loop looks for `end`.
    fn operators(&mut self) -> Result<ParseNode, ParseError> {
        let mut node = ParseNode::nonterminal(Nonterminal::Operators);
        loop {
            node.push(self.op()?);
            self.cursor.skip_whitespace();
            if self.cursor.is_at_end() || self.cursor.at_keyword(KeywordId::End) {
                break;
            }
        }
        Ok(node)
    }

    /// `Id ':=' Value (('+'|'-') Value)? ';'`
    fn op(&mut self) -> Result<ParseNode, ParseError> {
        tracing::trace!(pos = self.cursor.position(), "Op");
        let mut node = ParseNode::nonterminal(Nonterminal::Op);
        node.push(self.identifier()?);
        node.push(self.operator(OperatorId::Assign)?);
        node.push(self.value()?);
        if let Some(op) = self.at_additive() {
            node.push(self.operator(op)?);
            node.push(self.value()?);
        }
        node.push(self.punct(PunctuationId::Semicolon)?);
        Ok(node)
    }

    /// `StringConst | Number | NumExpr`, chosen by the first non-whitespace character.
    ///
    /// String constants and numbers are pushed as bare `Const` leaves; anything else is an `Expr`.
    fn value(&mut self) -> Result<ParseNode, ParseError> {
        match self.cursor.lookahead() {
            Some(c) if c == punctuation::as_char(PunctuationId::Quote) => self.string_const(),
            Some(c) if chars::is_digit(c) => self.number(),
            _ => self.num_expr(),
        }
    }
}
