use lsp_types::{DiagnosticSeverity, NumberOrString};
use pascal_analysis::diagnostics::UNDECLARED;
use pascal_db::{Diagnostic, DocumentInfo};
use pascal_errors::Severity;

use crate::analysis::to_lsp_range;

pub(crate) const SOURCE: &str = "pascal";

/// The document's findings in protocol form. Undeclared-identifier findings
/// carry the word in `data` for the quick fix.
pub(crate) fn diagnostics(document: &DocumentInfo) -> Vec<lsp_types::Diagnostic> {
    document.diagnostics().iter().map(|diagnostic| to_lsp(document, diagnostic)).collect()
}

fn to_lsp(document: &DocumentInfo, diagnostic: &Diagnostic) -> lsp_types::Diagnostic {
    let severity = match diagnostic.severity() {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    };

    let data = (diagnostic.code() == UNDECLARED).then(|| {
        let word = &document.text()[diagnostic.range()];
        serde_json::json!({ "word": word })
    });

    lsp_types::Diagnostic {
        range: to_lsp_range(document.range(diagnostic.range())),
        severity: Some(severity),
        code: Some(NumberOrString::String(diagnostic.code().to_owned())),
        source: Some(SOURCE.to_owned()),
        message: diagnostic.message().to_owned(),
        data,
        ..lsp_types::Diagnostic::default()
    }
}
