use std::collections::HashMap;

use lsp_types::{
    CodeAction, CodeActionKind, CodeActionOrCommand, NumberOrString, Position, Range, TextEdit,
    Uri, WorkspaceEdit,
};
use pascal_analysis::diagnostics::{MISSING_SEMICOLON, UNDECLARED};

/// Quick fixes for the diagnostics the editor sends back with a
/// `textDocument/codeAction` request.
pub(crate) fn code_actions(
    uri: &Uri,
    diagnostics: &[lsp_types::Diagnostic],
) -> Vec<CodeActionOrCommand> {
    let mut actions = Vec::new();

    for diagnostic in diagnostics {
        let Some(NumberOrString::String(code)) = &diagnostic.code else {
            continue;
        };

        let fix = match code.as_str() {
            UNDECLARED => {
                let Some(word) = diagnostic
                    .data
                    .as_ref()
                    .and_then(|data| data.get("word"))
                    .and_then(|word| word.as_str())
                else {
                    continue;
                };

                let top = Range::new(Position::new(0, 0), Position::new(0, 0));
                let edit = TextEdit::new(top, format!("var {word}: Integer;\n"));
                (format!("Declare '{word}' as variable"), edit)
            }
            MISSING_SEMICOLON => {
                let at = Range::new(diagnostic.range.start, diagnostic.range.start);
                ("Add missing semicolon".to_owned(), TextEdit::new(at, ";".to_owned()))
            }
            _ => continue,
        };

        actions.push(quick_fix(uri, diagnostic, fix));
    }

    actions
}

fn quick_fix(
    uri: &Uri,
    diagnostic: &lsp_types::Diagnostic,
    (title, edit): (String, TextEdit),
) -> CodeActionOrCommand {
    CodeActionOrCommand::CodeAction(CodeAction {
        title,
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![diagnostic.clone()]),
        edit: Some(WorkspaceEdit {
            changes: Some(HashMap::from([(uri.clone(), vec![edit])])),
            ..WorkspaceEdit::default()
        }),
        ..CodeAction::default()
    })
}
