mod category;
mod code_actions;
mod completion;
mod diagnostics;
mod document_symbols;
mod formatting;
mod goto_definition;
mod hover;
mod rename;

use std::sync::Arc;

pub use category::Category;
pub(crate) use code_actions::code_actions;
pub(crate) use completion::completion;
pub(crate) use diagnostics::diagnostics;
pub(crate) use document_symbols::document_symbols;
pub(crate) use formatting::format;
pub(crate) use goto_definition::goto_definition;
pub(crate) use hover::hover;
use pascal_db::{DocumentInfo, DocumentStore};
use pascal_syntax::{Position, Range};
pub(crate) use rename::{is_identifier, rename};

/// The open documents of one editor session.
#[derive(Default)]
pub struct Analysis {
    documents: DocumentStore<lsp_types::Uri>,
}

impl Analysis {
    pub fn update(&mut self, uri: lsp_types::Uri, text: String, version: i32) -> Arc<DocumentInfo> {
        self.documents.update(uri, text, version)
    }

    pub fn evict(&mut self, uri: &lsp_types::Uri) -> bool {
        self.documents.evict(uri)
    }

    pub fn document(&self, uri: &lsp_types::Uri) -> Option<Arc<DocumentInfo>> {
        self.documents.get(uri)
    }
}

/// A cursor inside one document snapshot.
#[derive(Clone, Copy)]
pub struct FilePosition<'a> {
    pub document: &'a DocumentInfo,
    pub position: Position,
}

pub(crate) fn to_lsp_range(range: Range) -> lsp_types::Range {
    lsp_types::Range {
        start: lsp_types::Position::new(range.start.line, range.start.character),
        end: lsp_types::Position::new(range.end.line, range.end.character),
    }
}

pub(crate) fn from_lsp_position(position: lsp_types::Position) -> Position {
    Position::new(position.line, position.character)
}
