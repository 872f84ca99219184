mod api;
mod notifications;
mod requests;

use anyhow::Result;

use crate::Analysis;

/// Language server over an `lsp-server` connection. Messages are handled one
/// at a time, each to completion.
pub struct Server {
    connection: lsp_server::Connection,
    io_threads: Option<lsp_server::IoThreads>,
    analysis: Analysis,
}

impl Server {
    fn server_capabilities() -> lsp_types::ServerCapabilities {
        lsp_types::ServerCapabilities {
            text_document_sync: Some(lsp_types::TextDocumentSyncCapability::Kind(
                lsp_types::TextDocumentSyncKind::FULL,
            )),
            completion_provider: Some(lsp_types::CompletionOptions::default()),
            hover_provider: Some(lsp_types::HoverProviderCapability::Simple(true)),
            definition_provider: Some(lsp_types::OneOf::Left(true)),
            rename_provider: Some(lsp_types::OneOf::Left(true)),
            document_formatting_provider: Some(lsp_types::OneOf::Left(true)),
            code_action_provider: Some(lsp_types::CodeActionProviderCapability::Simple(true)),
            document_symbol_provider: Some(lsp_types::OneOf::Left(true)),
            ..lsp_types::ServerCapabilities::default()
        }
    }

    pub fn stdio() -> Result<Self> {
        let (connection, io_threads) = lsp_server::Connection::stdio();
        Self::new(connection, Some(io_threads))
    }

    /// Runs the `initialize` handshake on `connection`.
    pub fn new(
        connection: lsp_server::Connection,
        io_threads: Option<lsp_server::IoThreads>,
    ) -> Result<Self> {
        let (initialize_id, _initialize_params) = match connection.initialize_start() {
            Ok(it) => it,
            Err(protocol_error) => {
                if protocol_error.channel_is_disconnected() {
                    if let Some(io_threads) = io_threads {
                        io_threads.join()?;
                    }
                }
                return Err(protocol_error.into());
            }
        };

        let initialize_data = serde_json::json!({
            "capabilities": Self::server_capabilities(),
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            },
        });

        if let Err(protocol_error) = connection.initialize_finish(initialize_id, initialize_data) {
            if protocol_error.channel_is_disconnected() {
                if let Some(io_threads) = io_threads {
                    io_threads.join()?;
                }
            }
            return Err(protocol_error.into());
        }

        tracing::info!("initialized");
        Ok(Self { connection, io_threads, analysis: Analysis::default() })
    }

    fn send(&self, message: lsp_server::Message) {
        if let Err(error) = self.connection.sender.send(message) {
            tracing::error!(%error, "client connection is closed");
        }
    }

    fn respond(&mut self, response: lsp_server::Response) {
        self.send(response.into());
    }

    fn notify<N>(&self, params: N::Params)
    where
        N: lsp_types::notification::Notification,
    {
        self.send(lsp_server::Notification::new(N::METHOD.to_owned(), params).into());
    }

    pub fn run(mut self) -> Result<()> {
        let receiver = self.connection.receiver.clone();
        for message in &receiver {
            match message {
                lsp_server::Message::Request(request) => {
                    if self.connection.handle_shutdown(&request)? {
                        tracing::info!("shutting down");
                        break;
                    }
                    api::request(&mut self, request);
                }
                lsp_server::Message::Response(_response) => {}
                lsp_server::Message::Notification(notification) => {
                    api::notification(&mut self, notification);
                }
            }
        }

        let Self { connection, io_threads, .. } = self;
        drop(connection);
        if let Some(io_threads) = io_threads {
            io_threads.join()?;
        }

        Ok(())
    }
}

fn from_json<T: serde::de::DeserializeOwned>(
    what: &'static str,
    json: &serde_json::Value,
) -> Result<T> {
    serde_json::from_value(json.clone())
        .map_err(|e| anyhow::format_err!("Failed to deserialize {what}: {e}; {json}"))
}

fn result_to_response<R>(
    id: lsp_server::RequestId,
    result: Result<R::Result>,
) -> lsp_server::Response
where
    R: lsp_types::request::Request,
    R::Result: serde::Serialize,
{
    match result {
        Ok(resp) => lsp_server::Response::new_ok(id, &resp),
        Err(error) => {
            tracing::error!(method = R::METHOD, %error, "request failed");
            lsp_server::Response::new_err(
                id,
                lsp_server::ErrorCode::InternalError as i32,
                error.to_string(),
            )
        }
    }
}
