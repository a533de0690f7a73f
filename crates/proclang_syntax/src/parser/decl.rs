/// Program header and declarations.
///
/// `Program`, `Descriptions`, `DescrList`, `Descr`, `VarList`, `Type`.
impl<'a> Parser<'a> {
    /// `'procedure' Id ';' 'begin' Descriptions Operators 'end'`
    fn program(&mut self) -> Result<ParseNode, ParseError> {
        tracing::trace!(pos = self.cursor.position(), "Program");
        let mut node = ParseNode::nonterminal(Nonterminal::Program).with_category(Category::Program);
        node.push(self.keyword(KeywordId::Procedure)?);
        node.push(self.identifier()?);
        node.push(self.punct(PunctuationId::Semicolon)?);
        node.push(self.keyword(KeywordId::Begin)?);
        node.push(self.descriptions()?);
        node.push(self.operators()?);
        node.push(self.keyword(KeywordId::End)?);
        Ok(node)
    }

    /// `('var' DescrList)?`. An absent clause yields an empty node.
    fn descriptions(&mut self) -> Result<ParseNode, ParseError> {
        let mut node = ParseNode::nonterminal(Nonterminal::Descriptions);
        if self.cursor.at_keyword(KeywordId::Var) {
            tracing::trace!(pos = self.cursor.position(), "Descriptions");
            node.push(self.keyword(KeywordId::Var)?);
            node.push(self.descr_list()?);
        }
        Ok(node)
    }

    /// `Descr ('var' Descr)*`: every declaration after the first repeats `var`.
    fn descr_list(&mut self) -> Result<ParseNode, ParseError> {
        let mut node = ParseNode::nonterminal(Nonterminal::DescrList);
        node.push(self.descr()?);
        while self.cursor.at_keyword(KeywordId::Var) {
            node.push(self.keyword(KeywordId::Var)?);
            node.push(self.descr()?);
        }
        Ok(node)
    }

    /// `VarList ':' Type ';'`
    fn descr(&mut self) -> Result<ParseNode, ParseError> {
        tracing::trace!(pos = self.cursor.position(), "Descr");
        let mut node = ParseNode::nonterminal(Nonterminal::Descr);
        node.push(self.var_list()?);
        node.push(self.expect_punct(PunctuationId::Colon, "Expected ':' after variable declaration")?);
        node.push(self.type_name()?);
        node.push(self.punct(PunctuationId::Semicolon)?);
        Ok(node)
    }

    /// `Id (',' Id)*`
    fn var_list(&mut self) -> Result<ParseNode, ParseError> {
        let mut node = ParseNode::nonterminal(Nonterminal::VarList);
        node.push(self.identifier()?);
        while self.cursor.at_punct(PunctuationId::Comma) {
            node.push(self.punct(PunctuationId::Comma)?);
            node.push(self.identifier()?);
        }
        Ok(node)
    }

    /// `'integer' | 'char'`, pushed as a single `WordsKey` leaf with no wrapper node.
    fn type_name(&mut self) -> Result<ParseNode, ParseError> {
        for &id in TYPE_NAMES {
            if self.cursor.at_keyword(id) {
                return self.keyword(id);
            }
        }
        let expected: Vec<String> = TYPE_NAMES.iter().map(|&id| format!("'{}'", keywords::as_str(id))).collect();
        Err(
            ParseError::syntax(format!("Expected type {}", expected.join(" or ")), self.cursor.upcoming_span())
                .with_help(self.cursor.found_note()),
        )
    }
}
