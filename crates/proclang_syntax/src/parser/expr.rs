/// Numeric expressions: `NumExpr` and `SimpleExpr`.
impl<'a> Parser<'a> {
    /// `SimpleExpr (('+'|'-') SimpleExpr)*`, printed as `Expr`.
    fn num_expr(&mut self) -> Result<ParseNode, ParseError> {
        tracing::trace!(pos = self.cursor.position(), "Expr");
        let mut node = ParseNode::nonterminal(Nonterminal::NumExpr);
        node.push(self.simple_expr()?);
        while let Some(op) = self.at_additive() {
            node.push(self.operator(op)?);
            node.push(self.simple_expr()?);
        }
        Ok(node)
    }

    /// `Id | Number | '(' NumExpr ')'`
    fn simple_expr(&mut self) -> Result<ParseNode, ParseError> {
        let mut node = ParseNode::nonterminal(Nonterminal::SimpleExpr);
        match self.cursor.lookahead() {
            Some(c) if chars::is_letter(c) => node.push(self.identifier()?),
            Some(c) if chars::is_digit(c) => node.push(self.number()?),
            Some(c) if c == punctuation::as_char(PunctuationId::LParen) => {
                self.enter_nesting()?;
                node.push(self.punct(PunctuationId::LParen)?);
                node.push(self.num_expr()?);
                node.push(self.punct(PunctuationId::RParen)?);
                self.nesting -= 1;
            }
            _ => {
                return Err(ParseError::syntax(
                    "Expected simple numerical expression",
                    self.cursor.upcoming_span(),
                )
                .with_help(self.cursor.found_note()));
            }
        }
        Ok(node)
    }

    fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if self.nesting >= MAX_NESTING_DEPTH {
            tracing::debug!(pos = self.cursor.position(), "nesting limit reached");
            return Err(ParseError::syntax("Expression nested too deeply", self.cursor.upcoming_span())
                .with_help(format!("at most {MAX_NESTING_DEPTH} levels of parentheses are allowed")));
        }
        self.nesting += 1;
        Ok(())
    }
}
