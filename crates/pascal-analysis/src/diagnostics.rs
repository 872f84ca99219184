//! Line-oriented checks over raw text. They run whether or not the text
//! parsed.

use pascal_errors::Diagnostic;
use text_size::{TextRange, TextSize};

use crate::SymbolTable;
use crate::builtins::is_builtin;
use crate::words::{identifiers, word_runs};

pub const MISMATCHED_BEGIN_END: &str = "mismatched_begin_end";
pub const UNDECLARED: &str = "undeclared";
pub const MISSING_SEMICOLON: &str = "missing_semicolon";

/// Lines that legitimately stand without a trailing `;`.
const STANDALONE: [&str; 14] = [
    "begin",
    "end",
    "else",
    "until",
    "var",
    "const",
    "type",
    "procedure",
    "function",
    "program",
    "unit",
    "uses",
    "interface",
    "implementation",
];

pub fn check(text: &str, symbols: &SymbolTable) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    begin_end_balance(text, &mut diagnostics);
    undeclared_identifiers(text, symbols, &mut diagnostics);
    missing_semicolons(text, &mut diagnostics);

    diagnostics
}

/// One document-level error on the last line when the whole-word counts of
/// `begin` and `end` differ.
fn begin_end_balance(text: &str, diagnostics: &mut Vec<Diagnostic>) {
    let (mut begins, mut ends) = (0usize, 0usize);
    for (_, word) in word_runs(text) {
        if word.eq_ignore_ascii_case("begin") {
            begins += 1;
        } else if word.eq_ignore_ascii_case("end") {
            ends += 1;
        }
    }

    if begins != ends {
        let last_line = text.rfind('\n').map_or(0, |newline| newline + 1);
        let range = TextRange::new(offset(last_line), TextSize::of(text));

        diagnostics.push(Diagnostic::error(
            MISMATCHED_BEGIN_END,
            format!("Mismatched begin/end: {begins} begin(s), {ends} end(s)"),
            range,
        ));
    }
}

fn undeclared_identifiers(text: &str, symbols: &SymbolTable, diagnostics: &mut Vec<Diagnostic>) {
    for (range, word) in identifiers(text) {
        if is_builtin(word) || symbols.find(word).is_some() || in_string_or_comment(text, range) {
            continue;
        }

        diagnostics.push(Diagnostic::error(
            UNDECLARED,
            format!("Undeclared identifier: '{word}'"),
            range,
        ));
    }
}

/// Judged from the same line only: an odd number of quotes, or a comment
/// opener, before the word.
fn in_string_or_comment(text: &str, range: TextRange) -> bool {
    let end = usize::from(range.start());
    let start = text[..end].rfind('\n').map_or(0, |newline| newline + 1);
    let before = &text[start..end];

    before.matches('\'').count() % 2 == 1
        || before.contains("//")
        || before.contains('{')
        || before.contains("(*")
}

/// Every line but the last that has content, does not end in `;` and is not
/// a lone section keyword gets a warning at its end.
fn missing_semicolons(text: &str, diagnostics: &mut Vec<Diagnostic>) {
    let mut line_start = 0;
    let mut lines = text.split('\n').peekable();

    while let Some(line) = lines.next() {
        if lines.peek().is_none() {
            break;
        }

        let content = line.trim_end_matches('\r');
        let trimmed = content.trim();
        let standalone = STANDALONE.iter().any(|keyword| keyword.eq_ignore_ascii_case(trimmed));

        if !trimmed.is_empty() && !trimmed.ends_with(';') && !standalone {
            let end = offset(line_start + content.len());
            diagnostics.push(Diagnostic::warning(
                MISSING_SEMICOLON,
                "Missing semicolon",
                TextRange::empty(end),
            ));
        }

        line_start += line.len() + 1;
    }
}

fn offset(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::new(u32::MAX))
}
