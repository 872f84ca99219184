use lsp_types::{CompletionItemKind, SymbolKind as LspSymbolKind};
use pascal_analysis::{SymbolKind, symbol_kind};
use pascal_syntax::ast::NodeKind;

/// How an entity is presented to the editor. Every provider goes through
/// this one mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Module,
    Procedure,
    Function,
    Variable,
    Type,
    Constant,
    Keyword,
}

impl Category {
    pub const fn of_symbol(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Module => Self::Module,
            SymbolKind::Procedure => Self::Procedure,
            SymbolKind::Function => Self::Function,
            SymbolKind::Variable => Self::Variable,
            SymbolKind::Type => Self::Type,
            SymbolKind::Constant => Self::Constant,
        }
    }

    /// `None` for unnamed containers.
    pub const fn of_node(kind: NodeKind) -> Option<Self> {
        match symbol_kind(kind) {
            Some(kind) => Some(Self::of_symbol(kind)),
            None => None,
        }
    }

    pub fn completion_kind(self) -> CompletionItemKind {
        match self {
            Self::Module => CompletionItemKind::MODULE,
            Self::Procedure | Self::Function => CompletionItemKind::FUNCTION,
            Self::Variable => CompletionItemKind::VARIABLE,
            Self::Type => CompletionItemKind::CLASS,
            Self::Constant => CompletionItemKind::CONSTANT,
            Self::Keyword => CompletionItemKind::KEYWORD,
        }
    }

    pub fn symbol_kind(self) -> LspSymbolKind {
        match self {
            Self::Module => LspSymbolKind::MODULE,
            Self::Procedure | Self::Function => LspSymbolKind::FUNCTION,
            Self::Variable => LspSymbolKind::VARIABLE,
            Self::Type => LspSymbolKind::CLASS,
            Self::Constant => LspSymbolKind::CONSTANT,
            Self::Keyword => LspSymbolKind::KEY,
        }
    }
}
