use lsp_types::DocumentSymbol;
use pascal_db::DocumentInfo;
use pascal_syntax::ast::Node;

use crate::Category;
use crate::analysis::to_lsp_range;

/// Outline of the document. Named nodes become entries; unnamed containers
/// (blocks and unit sections) pass their entries up to the parent.
pub(crate) fn document_symbols(document: &DocumentInfo) -> Vec<DocumentSymbol> {
    let mut symbols = Vec::new();
    if let Some(root) = document.ast() {
        collect(root, &mut symbols);
    }
    symbols
}

fn collect(node: &Node, out: &mut Vec<DocumentSymbol>) {
    let (Some(name), Some(category)) = (node.name(), Category::of_node(node.kind())) else {
        for child in node.children() {
            collect(child, out);
        }
        return;
    };

    let mut children = Vec::new();
    for child in node.children() {
        collect(child, &mut children);
    }

    let range = to_lsp_range(node.range());

    #[expect(deprecated)]
    out.push(DocumentSymbol {
        name: name.to_owned(),
        detail: None,
        kind: category.symbol_kind(),
        tags: None,
        deprecated: None,
        range,
        selection_range: range,
        children: (!children.is_empty()).then_some(children),
    });
}
