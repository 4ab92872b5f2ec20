//! SuperSQL Language Server Protocol implementation
//!
//! Provides IDE features:
//! - Completion (keywords, operators, functions, aggregates, types)
//! - Hover (signatures and docs)
//! - Signature help (active parameter of the enclosing call)
//!
//! Documents are synced in full; every request re-scans the current text.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, info, warn};

use crate::completion;
use crate::config::ServerConfig;
use crate::hover;
use crate::registry::Registry;
use crate::signature;
use crate::version;

/// SuperSQL Language Server Backend
pub struct Backend {
    client: Client,
    registry: Arc<Registry>,
    config: RwLock<ServerConfig>,
    documents: RwLock<HashMap<Url, String>>,
}

impl Backend {
    pub fn new(client: Client, registry: Arc<Registry>, config: ServerConfig) -> Self {
        Self {
            client,
            registry,
            config: RwLock::new(config),
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Current configuration snapshot
    pub async fn config(&self) -> ServerConfig {
        self.config.read().await.clone()
    }

    async fn store_document(&self, uri: Url, text: String) {
        debug!(%uri, bytes = text.len(), "document stored");
        self.documents.write().await.insert(uri, text);
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(options) = params.initialization_options {
            let mut config = self.config.write().await;
            match config.clone().with_init_options(&options) {
                Ok(updated) => *config = updated,
                Err(e) => warn!("ignoring initializationOptions: {e}"),
            }
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec!["(".to_string(), ":".to_string()]),
                    ..Default::default()
                }),
                signature_help_provider: Some(SignatureHelpOptions {
                    trigger_characters: Some(vec!["(".to_string(), ",".to_string()]),
                    retrigger_characters: Some(vec![",".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "superlsp".to_string(),
                version: Some(version::full_version()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!(elements = self.registry.len(), "SuperSQL language server initialized");
        self.client
            .log_message(MessageType::INFO, "SuperSQL Language Server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("shutdown requested");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.store_document(params.text_document.uri, params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // Full sync - the last change carries the whole content
        if let Some(change) = params.content_changes.into_iter().last() {
            self.store_document(params.text_document.uri, change.text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.write().await.remove(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(text) = docs.get(uri) else {
            return Ok(None);
        };

        Ok(hover::hover(&self.registry, text, position))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let docs = self.documents.read().await;
        let Some(text) = docs.get(uri) else {
            return Ok(None);
        };

        let items = completion::complete(&self.registry, text, position);
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn signature_help(&self, params: SignatureHelpParams) -> Result<Option<SignatureHelp>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let scan = self.config.read().await.active_parameter_scan;

        let docs = self.documents.read().await;
        let Some(text) = docs.get(uri) else {
            return Ok(None);
        };

        Ok(signature::signature_help_with(&self.registry, text, position, scan))
    }
}

/// Start the LSP server on stdio
pub async fn run_server(registry: Arc<Registry>, config: ServerConfig) {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    info!(version = %version::full_version(), "starting SuperSQL language server");
    let (service, socket) =
        LspService::new(move |client| Backend::new(client, registry, config));
    Server::new(stdin, stdout, socket).serve(service).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service(config: ServerConfig) -> (LspService<Backend>, tower_lsp::ClientSocket) {
        let registry = Arc::new(Registry::builtin());
        LspService::new(move |client| Backend::new(client, registry, config))
    }

    fn uri() -> Url {
        Url::parse("file:///tmp/query.spq").unwrap()
    }

    fn position_params(line: u32, character: u32) -> TextDocumentPositionParams {
        TextDocumentPositionParams {
            text_document: TextDocumentIdentifier { uri: uri() },
            position: Position::new(line, character),
        }
    }

    async fn open(backend: &Backend, text: &str) {
        backend
            .did_open(DidOpenTextDocumentParams {
                text_document: TextDocumentItem {
                    uri: uri(),
                    language_id: "spq".to_string(),
                    version: 1,
                    text: text.to_string(),
                },
            })
            .await;
    }

    #[tokio::test]
    async fn test_initialize_advertises_capabilities() {
        let (service, _socket) = service(ServerConfig::default());
        let result = service.inner().initialize(InitializeParams::default()).await.unwrap();
        let caps = result.capabilities;
        assert!(caps.hover_provider.is_some());
        assert!(caps.completion_provider.is_some());
        assert!(caps.signature_help_provider.is_some());
        assert_eq!(
            result.server_info.and_then(|info| info.version),
            Some(version::full_version())
        );
    }

    #[tokio::test]
    async fn test_initialization_options_update_config() {
        let (service, _socket) = service(ServerConfig::default());
        let backend = service.inner();
        let params = InitializeParams {
            initialization_options: Some(json!({ "activeParameterScan": "document" })),
            ..Default::default()
        };
        backend.initialize(params).await.unwrap();
        assert_eq!(backend.config().await.active_parameter_scan, signature::ParamScan::Document);
    }

    #[tokio::test]
    async fn test_invalid_initialization_options_are_ignored() {
        let (service, _socket) = service(ServerConfig::default());
        let backend = service.inner();
        let params = InitializeParams {
            initialization_options: Some(json!({ "activeParameterScan": "sideways" })),
            ..Default::default()
        };
        assert!(backend.initialize(params).await.is_ok());
        assert_eq!(backend.config().await, ServerConfig::default());
    }

    #[tokio::test]
    async fn test_requests_on_open_document() {
        let (service, _socket) = service(ServerConfig::default());
        let backend = service.inner();
        open(backend, "from logs\n| where len(msg, ").await;

        let hover = backend
            .hover(HoverParams {
                text_document_position_params: position_params(1, 9),
                work_done_progress_params: Default::default(),
            })
            .await
            .unwrap();
        assert!(hover.is_some());

        let help = backend
            .signature_help(SignatureHelpParams {
                context: None,
                text_document_position_params: position_params(1, 17),
                work_done_progress_params: Default::default(),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(help.signatures[0].label, "len(value: string|bytes|array) -> int64");

        let completion = backend
            .completion(CompletionParams {
                text_document_position: position_params(0, 3),
                work_done_progress_params: Default::default(),
                partial_result_params: Default::default(),
                context: None,
            })
            .await
            .unwrap();
        let Some(CompletionResponse::Array(items)) = completion else {
            panic!("expected completion array");
        };
        assert!(items.iter().any(|item| item.label == "from"));
    }

    #[tokio::test]
    async fn test_change_and_close() {
        let (service, _socket) = service(ServerConfig::default());
        let backend = service.inner();
        open(backend, "sort").await;
        backend
            .did_change(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier { uri: uri(), version: 2 },
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: "nothing_known".to_string(),
                }],
            })
            .await;
        let params = || HoverParams {
            text_document_position_params: position_params(0, 2),
            work_done_progress_params: Default::default(),
        };
        assert!(backend.hover(params()).await.unwrap().is_none());

        backend
            .did_close(DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier { uri: uri() },
            })
            .await;
        assert!(backend.hover(params()).await.unwrap().is_none());
    }
}
