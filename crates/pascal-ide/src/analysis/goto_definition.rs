use pascal_syntax::Range;

use crate::FilePosition;

/// The word under the cursor and the range of the declaration it names.
pub(crate) fn goto_definition(
    FilePosition { document, position }: FilePosition<'_>,
) -> Option<(Range, Range)> {
    let (origin, word) = document.word_at(position)?;
    let symbol = document.symbols().find(word)?;

    Some((origin, symbol.range))
}
