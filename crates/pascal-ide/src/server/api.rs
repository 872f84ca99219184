use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Result, bail};
use lsp_types::notification::{
    DidChangeTextDocument, DidCloseTextDocument, DidOpenTextDocument, PublishDiagnostics,
};
use lsp_types::request::{
    CodeActionRequest, Completion, DocumentSymbolRequest, Formatting, GotoDefinition,
    HoverRequest, Rename,
};
use pascal_db::DocumentInfo;

use super::Server;
use super::notifications::NotificationDispatcher;
use super::requests::RequestDispatcher;
use crate::FilePosition;
use crate::analysis::{self, from_lsp_position, to_lsp_range};

pub(crate) fn request(server: &mut Server, request: lsp_server::Request) {
    RequestDispatcher::new(request, server)
        .on::<Completion>(handle_completion)
        .on::<HoverRequest>(handle_hover)
        .on::<GotoDefinition>(handle_goto_definition)
        .on::<Rename>(handle_rename)
        .on::<Formatting>(handle_formatting)
        .on::<CodeActionRequest>(handle_code_action)
        .on::<DocumentSymbolRequest>(handle_document_symbol)
        .finish();
}

fn document(server: &Server, uri: &lsp_types::Uri) -> Option<Arc<DocumentInfo>> {
    let document = server.analysis.document(uri);
    if document.is_none() {
        tracing::debug!(uri = uri.as_str(), "request for a document that is not open");
    }
    document
}

#[expect(clippy::needless_pass_by_value)]
fn handle_completion(
    server: &mut Server,
    params: lsp_types::CompletionParams,
) -> Result<Option<lsp_types::CompletionResponse>> {
    let document = document(server, &params.text_document_position.text_document.uri);
    let items = analysis::completion(document.as_deref());

    Ok(Some(lsp_types::CompletionResponse::List(lsp_types::CompletionList {
        is_incomplete: false,
        items,
    })))
}

#[expect(clippy::needless_pass_by_value)]
fn handle_hover(
    server: &mut Server,
    params: lsp_types::HoverParams,
) -> Result<Option<lsp_types::Hover>> {
    let tdpp = &params.text_document_position_params;
    let Some(document) = document(server, &tdpp.text_document.uri) else {
        return Ok(None);
    };
    let position = FilePosition { document: &document, position: from_lsp_position(tdpp.position) };

    Ok(analysis::hover(position).map(|(range, value)| lsp_types::Hover {
        contents: lsp_types::HoverContents::Markup(lsp_types::MarkupContent {
            kind: lsp_types::MarkupKind::Markdown,
            value,
        }),
        range: Some(to_lsp_range(range)),
    }))
}

#[expect(clippy::needless_pass_by_value)]
fn handle_goto_definition(
    server: &mut Server,
    params: lsp_types::GotoDefinitionParams,
) -> Result<Option<lsp_types::GotoDefinitionResponse>> {
    let tdpp = &params.text_document_position_params;
    let Some(document) = document(server, &tdpp.text_document.uri) else {
        return Ok(None);
    };
    let position = FilePosition { document: &document, position: from_lsp_position(tdpp.position) };

    match analysis::goto_definition(position) {
        Some((origin_selection_range, target_range)) => {
            Ok(Some(lsp_types::GotoDefinitionResponse::Link(vec![lsp_types::LocationLink {
                origin_selection_range: to_lsp_range(origin_selection_range).into(),
                target_uri: tdpp.text_document.uri.clone(),
                target_range: to_lsp_range(target_range),
                target_selection_range: to_lsp_range(target_range),
            }])))
        }
        None => Ok(None),
    }
}

fn handle_rename(
    server: &mut Server,
    params: lsp_types::RenameParams,
) -> Result<Option<lsp_types::WorkspaceEdit>> {
    let lsp_types::RenameParams { text_document_position: tdpp, new_name, .. } = params;
    if !analysis::is_identifier(&new_name) {
        bail!("`{new_name}` is not a valid identifier");
    }

    let Some(document) = document(server, &tdpp.text_document.uri) else {
        return Ok(None);
    };
    let position = FilePosition { document: &document, position: from_lsp_position(tdpp.position) };

    Ok(analysis::rename(position, &new_name).map(|edits| lsp_types::WorkspaceEdit {
        changes: Some(HashMap::from([(tdpp.text_document.uri, edits)])),
        ..lsp_types::WorkspaceEdit::default()
    }))
}

#[expect(clippy::needless_pass_by_value)]
fn handle_formatting(
    server: &mut Server,
    params: lsp_types::DocumentFormattingParams,
) -> Result<Option<Vec<lsp_types::TextEdit>>> {
    let Some(document) = document(server, &params.text_document.uri) else {
        return Ok(None);
    };

    Ok(Some(analysis::format(&document, &params.options).into_iter().collect()))
}

#[expect(clippy::needless_pass_by_value)]
fn handle_code_action(
    _server: &mut Server,
    params: lsp_types::CodeActionParams,
) -> Result<Option<lsp_types::CodeActionResponse>> {
    let actions = analysis::code_actions(&params.text_document.uri, &params.context.diagnostics);
    Ok(Some(actions))
}

#[expect(clippy::needless_pass_by_value)]
fn handle_document_symbol(
    server: &mut Server,
    params: lsp_types::DocumentSymbolParams,
) -> Result<Option<lsp_types::DocumentSymbolResponse>> {
    let Some(document) = document(server, &params.text_document.uri) else {
        return Ok(None);
    };

    Ok(Some(lsp_types::DocumentSymbolResponse::Nested(analysis::document_symbols(&document))))
}

pub(crate) fn notification(server: &mut Server, notification: lsp_server::Notification) {
    NotificationDispatcher::new(notification, server)
        .on::<DidOpenTextDocument>(handle_did_open_text_document)
        .on::<DidChangeTextDocument>(handle_did_change_text_document)
        .on::<DidCloseTextDocument>(handle_did_close_text_document)
        .finish();
}

fn handle_did_open_text_document(
    server: &mut Server,
    params: lsp_types::DidOpenTextDocumentParams,
) -> Result<()> {
    let lsp_types::TextDocumentItem { uri, language_id: _, version, text } = params.text_document;

    let document = server.analysis.update(uri.clone(), text, version);
    publish_diagnostics(server, uri, &document);
    Ok(())
}

fn handle_did_change_text_document(
    server: &mut Server,
    params: lsp_types::DidChangeTextDocumentParams,
) -> Result<()> {
    let lsp_types::VersionedTextDocumentIdentifier { uri, version } = params.text_document;
    let Some(change) = params.content_changes.into_iter().last() else {
        bail!("no content change for `{}`", uri.as_str());
    };

    let document = server.analysis.update(uri.clone(), change.text, version);
    publish_diagnostics(server, uri, &document);
    Ok(())
}

fn handle_did_close_text_document(
    server: &mut Server,
    params: lsp_types::DidCloseTextDocumentParams,
) -> Result<()> {
    let uri = params.text_document.uri;
    server.analysis.evict(&uri);

    server.notify::<PublishDiagnostics>(lsp_types::PublishDiagnosticsParams {
        uri,
        diagnostics: Vec::new(),
        version: None,
    });
    Ok(())
}

fn publish_diagnostics(server: &Server, uri: lsp_types::Uri, document: &DocumentInfo) {
    server.notify::<PublishDiagnostics>(lsp_types::PublishDiagnosticsParams {
        uri,
        diagnostics: analysis::diagnostics(document),
        version: Some(document.version()),
    });
}
