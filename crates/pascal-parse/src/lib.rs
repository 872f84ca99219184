use std::fmt;

use pascal_syntax::Range;
use pascal_syntax::ast::Node;

mod grammar;
mod parser;
#[cfg(test)]
mod tests;

/// Parses a whole document.
///
/// Returns `None` when the text does not open with `program`, `unit`,
/// `procedure` or `function`, or when any required token is missing. There
/// is no partial tree.
pub fn parse(text: &str) -> Option<Node> {
    match try_parse(text) {
        Ok(node) => Some(node),
        Err(error) => {
            tracing::debug!(%error, "no syntax tree");
            None
        }
    }
}

/// Like [`parse`], but reports why no tree was produced.
pub fn try_parse(text: &str) -> Result<Node, ParseError> {
    let mut parser = parser::Parser::new(pascal_tokenizer::tokenize(text));
    grammar::root(&mut parser)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
    range: Range,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, range: Range) -> Self {
        Self { message: message.into(), range }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Range of the offending token.
    pub fn range(&self) -> Range {
        self.range
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.range.start)
    }
}

impl std::error::Error for ParseError {}
