use lsp_types::{CompletionItem, Documentation, MarkupContent, MarkupKind};
use pascal_analysis::builtins::{KEYWORDS, ROUTINES, TYPES};
use pascal_db::DocumentInfo;

use crate::Category;

fn item(label: &str, category: Category) -> CompletionItem {
    CompletionItem {
        label: label.to_owned(),
        kind: Some(category.completion_kind()),
        ..CompletionItem::default()
    }
}

/// Keywords, built-in types and routines, then the document's symbols.
/// Without a document only the built-in part is offered.
pub(crate) fn completion(document: Option<&DocumentInfo>) -> Vec<CompletionItem> {
    let mut items = Vec::new();

    items.extend(KEYWORDS.iter().map(|keyword| item(keyword, Category::Keyword)));
    items.extend(TYPES.iter().map(|ty| item(ty, Category::Type)));
    items.extend(ROUTINES.iter().map(|routine| CompletionItem {
        documentation: routine.doc.map(|doc| {
            Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: doc.to_owned(),
            })
        }),
        ..item(routine.name, Category::Function)
    }));

    if let Some(document) = document {
        items.extend(
            document
                .symbols()
                .get_all()
                .map(|symbol| item(&symbol.name, Category::of_symbol(symbol.kind))),
        );
    }

    items
}
