use lsp_types::TextEdit;
use pascal_analysis::words::word_runs;

use crate::FilePosition;
use crate::analysis::to_lsp_range;

/// Replaces every whole-word occurrence of the symbol under the cursor, in
/// any case. `None` unless the word names a declared symbol.
pub(crate) fn rename(
    FilePosition { document, position }: FilePosition<'_>,
    new_name: &str,
) -> Option<Vec<TextEdit>> {
    let (_, word) = document.word_at(position)?;
    document.symbols().find(word)?;

    let edits = word_runs(document.text())
        .filter(|(_, run)| run.eq_ignore_ascii_case(word))
        .map(|(range, _)| {
            TextEdit::new(to_lsp_range(document.range(range)), new_name.to_owned())
        })
        .collect();

    Some(edits)
}

/// Whether `name` can stand in for an identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
