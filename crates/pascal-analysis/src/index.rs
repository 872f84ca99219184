use pascal_syntax::ast::{Node, NodeKind};

use crate::{Symbol, SymbolKind, SymbolTable};

/// Symbol kind of a named node; `None` for unnamed containers.
pub const fn symbol_kind(kind: NodeKind) -> Option<SymbolKind> {
    Some(match kind {
        NodeKind::Program | NodeKind::Unit | NodeKind::UnitReference => SymbolKind::Module,
        NodeKind::Procedure => SymbolKind::Procedure,
        NodeKind::Function => SymbolKind::Function,
        NodeKind::VarDeclaration => SymbolKind::Variable,
        NodeKind::TypeDeclaration => SymbolKind::Type,
        NodeKind::ConstDeclaration => SymbolKind::Constant,
        NodeKind::Block | NodeKind::InterfaceSection | NodeKind::ImplementationSection => {
            return None;
        }
    })
}

/// Builds a fresh table from a pre-order walk of the tree, root included.
pub fn index(root: Option<&Node>) -> SymbolTable {
    let mut table = SymbolTable::default();

    for node in root.into_iter().flat_map(Node::descendants) {
        if let (Some(name), Some(kind)) = (node.name(), symbol_kind(node.kind())) {
            table.add(Symbol::new(name, kind, node.range()));
        }
    }

    table
}
