//! Identifier-shaped words in raw text, independent of tokenization.

use text_size::{TextRange, TextSize};

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Maximal runs of `[A-Za-z0-9_]`.
pub fn word_runs(text: &str) -> impl Iterator<Item = (TextRange, &str)> + '_ {
    let bytes = text.as_bytes();
    let mut pos = 0;

    std::iter::from_fn(move || {
        while pos < bytes.len() && !is_word_byte(bytes[pos]) {
            pos += 1;
        }
        if pos == bytes.len() {
            return None;
        }

        let start = pos;
        while pos < bytes.len() && is_word_byte(bytes[pos]) {
            pos += 1;
        }

        Some((range(start, pos), &text[start..pos]))
    })
}

/// Identifiers: runs with any leading digits cut off. Pure numbers yield
/// nothing.
pub fn identifiers(text: &str) -> impl Iterator<Item = (TextRange, &str)> + '_ {
    word_runs(text).filter_map(|(range, word)| {
        let ident = word.trim_start_matches(|c: char| c.is_ascii_digit());
        if ident.is_empty() {
            return None;
        }

        let start = range.end() - TextSize::of(ident);
        Some((TextRange::new(start, range.end()), ident))
    })
}

/// The identifier touching `offset`, either containing it or ending right
/// before it.
pub fn identifier_at(text: &str, offset: TextSize) -> Option<(TextRange, &str)> {
    identifiers(text)
        .take_while(|(range, _)| range.start() <= offset)
        .find(|(range, _)| range.contains_inclusive(offset))
}

fn range(start: usize, end: usize) -> TextRange {
    let start = TextSize::try_from(start).unwrap_or(TextSize::new(u32::MAX));
    let end = TextSize::try_from(end).unwrap_or(TextSize::new(u32::MAX));
    TextRange::new(start, end)
}
