use pascal_syntax::{Keyword, KeywordSet, Range, TokenKind};
use pascal_tokenizer::Token;

use crate::ParseError;

pub(crate) type Result<T, E = ParseError> = std::result::Result<T, E>;

/// An identifier taken from the token stream.
pub(crate) struct Ident {
    pub(crate) text: String,
    pub(crate) range: Range,
}

/// Cursor over a token vector that always ends with `EndOfInput`.
pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.last().is_some_and(Token::is_eof));
        Self { tokens, pos: 0 }
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn nth(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Range of the most recently consumed token.
    pub(crate) fn last_range(&self) -> Range {
        self.tokens[self.pos.saturating_sub(1)].range()
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.current().is_eof()
    }

    pub(crate) fn at_keyword(&self, keyword: Keyword) -> bool {
        self.current().is_keyword(keyword)
    }

    pub(crate) fn at_any(&self, set: &KeywordSet) -> bool {
        self.current().keyword().is_some_and(|keyword| set.contains(keyword))
    }

    pub(crate) fn at_punctuation(&self, text: &str) -> bool {
        self.current().is_punctuation(text)
    }

    /// Identifier spelled `word`, in any case.
    pub(crate) fn at_word(&self, word: &str) -> bool {
        let token = self.current();
        token.kind == TokenKind::Identifier && token.text.eq_ignore_ascii_case(word)
    }

    /// Consumes the current token and returns its range. Never moves past
    /// `EndOfInput`.
    pub(crate) fn advance(&mut self) -> Range {
        let range = self.current().range();
        if !self.at_eof() {
            self.pos += 1;
        }
        range
    }

    pub(crate) fn eat_punctuation(&mut self, text: &str) -> bool {
        let at = self.at_punctuation(text);
        if at {
            self.advance();
        }
        at
    }

    pub(crate) fn eat_operator(&mut self, text: &str) -> bool {
        let token = self.current();
        let at = token.kind == TokenKind::Operator && token.text == text;
        if at {
            self.advance();
        }
        at
    }

    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Range> {
        if self.at_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("expected `{}`", keyword.as_str())))
        }
    }

    pub(crate) fn expect_ident(&mut self) -> Result<Ident> {
        let token = self.current();
        if token.kind != TokenKind::Identifier {
            return Err(self.error("expected identifier"));
        }

        let text = token.text.clone();
        let range = self.advance();
        Ok(Ident { text, range })
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.current().range())
    }
}
