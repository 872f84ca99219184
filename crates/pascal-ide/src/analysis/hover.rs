use pascal_analysis::builtins::routine_doc;
use pascal_syntax::Range;

use crate::FilePosition;

/// Markdown for the word under the cursor: built-in documentation first,
/// then the kind of a declared symbol.
pub(crate) fn hover(FilePosition { document, position }: FilePosition<'_>) -> Option<(Range, String)> {
    let (range, word) = document.word_at(position)?;

    if let Some((name, doc)) = routine_doc(word) {
        return Some((range, format!("**{name}**\n\n{doc}")));
    }

    let symbol = document.symbols().find(word)?;
    Some((range, format!("**{}** `{}`", symbol.kind, symbol.name)))
}
