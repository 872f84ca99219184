use lsp_types::{FormattingOptions, TextEdit};
use pascal_db::DocumentInfo;

use crate::analysis::to_lsp_range;

const DEDENT_PREFIXES: [&str; 1] = ["end"];
const DEDENT_LINES: [&str; 3] = ["else", "except", "finally"];
const INDENT_PREFIXES: [&str; 7] =
    ["begin", "try", "case", "record", "class", "procedure", "function"];

/// Re-indents every line by block nesting. Returns a single edit replacing the
/// whole document, or nothing when the text is already formatted.
pub(crate) fn format(document: &DocumentInfo, options: &FormattingOptions) -> Option<TextEdit> {
    let formatted = reindent(document.text(), options);
    if formatted == document.text() {
        return None;
    }

    Some(TextEdit::new(to_lsp_range(document.full_range()), formatted))
}

fn reindent(text: &str, options: &FormattingOptions) -> String {
    let unit = if options.insert_spaces {
        " ".repeat(options.tab_size as usize)
    } else {
        "\t".to_owned()
    };

    let mut depth = 0usize;
    let mut lines = Vec::new();

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let lower = line.to_ascii_lowercase();
        if DEDENT_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
            || DEDENT_LINES.contains(&lower.as_str())
        {
            depth = depth.saturating_sub(1);
        }

        lines.push(format!("{}{line}", unit.repeat(depth)));

        if INDENT_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
            depth += 1;
        }
    }

    lines.join("\n")
}
