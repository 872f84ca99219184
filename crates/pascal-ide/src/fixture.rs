//! Test fixtures: `$0` marks the cursor, and a `//^^^` line marks a range on
//! the line above it.

use pascal_db::{DocumentInfo, analyze};
use pascal_syntax::{Position, Range};
use text_size::{TextRange, TextSize};

const CURSOR_MARKER: &str = "$0";

pub(crate) fn extract_offset(text: &str) -> (TextSize, String) {
    let cursor = text.find(CURSOR_MARKER).expect("cursor marker not found");
    let mut stripped = String::with_capacity(text.len() - CURSOR_MARKER.len());
    stripped.push_str(&text[..cursor]);
    stripped.push_str(&text[cursor + CURSOR_MARKER.len()..]);
    (TextSize::try_from(cursor).unwrap(), stripped)
}

/// Ranges marked by `^` runs on `//` lines, each pointing at the columns of
/// the nearest line above that is not itself an annotation.
pub(crate) fn extract_annotations(text: &str) -> Vec<TextRange> {
    let mut annotations = Vec::new();
    let mut target_start = None;
    let mut line_start = TextSize::new(0);

    for line in text.split_inclusive('\n') {
        let is_annotation = line.trim_start().starts_with("//") && line.contains('^');

        if is_annotation {
            let target: TextSize = target_start.expect("annotation without a line above");
            let mut rest = line;
            let mut column = 0;
            while let Some(idx) = rest.find('^') {
                column += idx;
                rest = &rest[idx..];
                let len = rest.chars().take_while(|&c| c == '^').count();

                let start = target + TextSize::try_from(column).unwrap();
                annotations.push(TextRange::at(start, TextSize::try_from(len).unwrap()));

                column += len;
                rest = &rest[len..];
            }
        } else {
            target_start = Some(line_start);
        }

        line_start += TextSize::of(line);
    }

    annotations
}

/// Analyzes a fixture and returns the cursor position.
pub(crate) fn position(text: &str) -> (DocumentInfo, Position) {
    let (offset, text) = extract_offset(text);
    let document = analyze(text, 0);
    let position = document.position(offset);
    (document, position)
}

pub(crate) fn annotated_range(document: &DocumentInfo) -> Range {
    let annotations = extract_annotations(document.text());
    assert_eq!(annotations.len(), 1, "expected exactly one annotation");
    document.range(annotations[0])
}

#[test]
fn annotations_point_at_the_line_above() {
    let text = "var Count: Integer;\n//  ^^^^^\nbegin\n";
    assert_eq!(extract_annotations(text), [TextRange::new(4.into(), 9.into())]);
}
