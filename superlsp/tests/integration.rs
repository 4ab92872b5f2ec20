//! Integration tests for the SuperSQL language server core
//!
//! Exercises the public engines against the built-in registry:
//! - Registry lookup and precedence
//! - Completion filtering and context
//! - Hover and signature help, including absence cases

use std::sync::Arc;

use superlsp::config::ServerConfig;
use superlsp::lsp::Backend;
use superlsp::registry::{ElementKind, LanguageElement, Registry};
use superlsp::{ParamScan, complete, hover, signature_help, signature_help_with};
use tower_lsp::lsp_types::*;
use tower_lsp::{LanguageServer, LspService};

fn pos(line: u32, character: u32) -> Position {
    Position::new(line, character)
}

fn labels(registry: &Registry, text: &str, position: Position) -> Vec<String> {
    complete(registry, text, position)
        .into_iter()
        .map(|item| item.label)
        .collect()
}

// ============================================
// Registry
// ============================================

#[test]
fn test_every_name_resolves_in_any_case() {
    let reg = Registry::builtin();
    for element in reg.iter() {
        let name = &element.name;
        let lower = reg.lookup(&name.to_lowercase()).unwrap();
        let upper = reg.lookup(&name.to_uppercase()).unwrap();
        assert_eq!(reg.lookup(name).unwrap(), lower);
        assert_eq!(lower, upper);
    }
}

#[test]
fn test_curated_entries_win_over_grammar_names() {
    let reg = Registry::builtin();
    // `cast`, `and`, `first` and `union` are grammar keywords with curated docs
    for name in ["cast", "and", "first", "union"] {
        let element = reg.lookup(name).unwrap();
        assert!(element.kind.is_callable(), "{name} should be curated");
        assert!(element.signature().is_some());
        assert!(!element.doc.is_empty());
    }
    assert!(reg.by_kind(ElementKind::Keyword).all(|e| e.name != "cast"));
    // `fuse` is both a grammar operator and a curated aggregate
    assert_eq!(reg.lookup("fuse").unwrap().kind, ElementKind::Aggregate);
}

#[test]
fn test_precedence_with_custom_sources() {
    let curated = LanguageElement::function(
        "trim",
        "Trim whitespace",
        "Remove leading and trailing whitespace from a string",
        "trim(value: string) -> string",
        &[("value", "String to trim")],
    );
    let reg = Registry::from_sources(
        vec![LanguageElement::stub("TRIM", ElementKind::Keyword)],
        vec![curated.clone()],
    );
    assert_eq!(reg.lookup("trim"), Some(&curated));
    assert_eq!(reg.len(), 1);
}

#[test]
fn test_builtin_registry_validates() {
    assert!(Registry::builtin().validate().is_ok());
}

// ============================================
// Completion
// ============================================

#[test]
fn test_prefix_filtering_is_exact() {
    let reg = Registry::builtin();
    for element in reg.iter() {
        let lower = element.name.to_lowercase();
        for len in 1..=lower.len().min(3) {
            let prefix = &lower[..len];
            // a bare prefix on its own line is in general context
            let items = labels(&reg, prefix, pos(0, len as u32));
            assert!(items.contains(&element.name), "{prefix} should offer {}", element.name);
            assert!(items.iter().all(|label| label.to_lowercase().starts_with(prefix)));
        }
    }
}

#[test]
fn test_completion_contexts() {
    let reg = Registry::builtin();

    let types = labels(&reg, "values cast(x, ", pos(0, 15));
    assert!(!types.is_empty());
    assert!(types.iter().all(|l| reg.lookup(l).unwrap().kind == ElementKind::Type));

    let calls = labels(&reg, "summarize c", pos(0, 11));
    assert!(calls.contains(&"count".to_string()));
    assert!(calls.contains(&"ceil".to_string()));

    let in_call = labels(&reg, "values upper(lo", pos(0, 15));
    assert_eq!(in_call, vec!["log", "lower"]);
}

#[test]
fn test_completion_on_short_document() {
    let reg = Registry::builtin();
    assert!(complete(&reg, "a\nb\nc", pos(5, 0)).is_empty());
}

#[test]
fn test_function_items_carry_snippets() {
    let reg = Registry::builtin();
    let items = complete(&reg, "values coal", pos(0, 11));
    let coalesce = items.iter().find(|i| i.label == "coalesce").unwrap();
    assert_eq!(coalesce.insert_text.as_deref(), Some("coalesce($1)"));
    assert_eq!(coalesce.detail.as_deref(), Some("function: First non-null value"));
}

// ============================================
// Hover
// ============================================

#[test]
fn test_hover_absent_on_empty_document() {
    assert!(hover(&Registry::builtin(), "", pos(0, 0)).is_none());
}

#[test]
fn test_hover_on_function_in_pipeline() {
    let reg = Registry::builtin();
    let text = "from logs\n| values Regexp_Replace(msg, 'a', 'b')";
    let h = hover(&reg, text, pos(1, 12)).unwrap();
    let HoverContents::Markup(markup) = h.contents else {
        panic!("expected markup");
    };
    assert!(markup.value.starts_with("```spq\nregexp_replace(value: string"));
    assert!(markup.value.ends_with("Replace matches of a regex pattern"));
}

#[test]
fn test_hover_on_keyword() {
    let reg = Registry::builtin();
    let h = hover(&reg, "SELECT x FROM t", pos(0, 2)).unwrap();
    let HoverContents::Markup(markup) = h.contents else {
        panic!("expected markup");
    };
    assert_eq!(markup.value, "**select** (keyword)\n\n");
}

// ============================================
// Signature help
// ============================================

#[test]
fn test_signature_round_trip() {
    let reg = Registry::from_sources(
        Vec::new(),
        vec![LanguageElement::function(
            "f",
            "",
            "",
            "f(a: int, b: string) -> bool",
            &[("a", ""), ("b", "")],
        )],
    );

    let first = signature_help(&reg, "f(", pos(0, 2)).unwrap();
    assert_eq!(first.active_parameter, Some(0));
    let params = first.signatures[0].parameters.clone().unwrap();
    let (ParameterLabel::LabelOffsets(a), ParameterLabel::LabelOffsets(b)) =
        (&params[0].label, &params[1].label)
    else {
        panic!("expected offsets");
    };
    assert!(a[1] <= b[0]);

    let second = signature_help(&reg, "f(x, ", pos(0, 5)).unwrap();
    assert_eq!(second.active_parameter, Some(1));
}

#[test]
fn test_signature_absent_inside_grouping() {
    assert!(signature_help(&Registry::builtin(), "x + (1)", pos(0, 6)).is_none());
}

#[test]
fn test_signature_for_builtin_aggregate() {
    let reg = Registry::builtin();
    let text = "summarize\n  m := collect_map(host, ";
    let h = signature_help(&reg, text, pos(1, 25)).unwrap();
    assert_eq!(h.signatures[0].label, "collect_map(key: any, value: any) -> map");
    assert_eq!(h.active_parameter, Some(1));
}

#[test]
fn test_parity_scan_overcounts() {
    let reg = Registry::builtin();
    // the cursor sits before `)`; the parity scan also sees the comma in `join`
    let text = "values pow(2)\n| values join(a, b)";
    let bounded = signature_help_with(&reg, text, pos(0, 12), ParamScan::Cursor).unwrap();
    let parity = signature_help_with(&reg, text, pos(0, 12), ParamScan::Document).unwrap();
    assert_eq!(bounded.active_parameter, Some(0));
    assert_eq!(parity.active_parameter, Some(1));
}

// ============================================
// Statelessness
// ============================================

#[test]
fn test_no_state_between_calls() {
    let reg = Registry::builtin();
    let text = "values upper(trim(x), ";
    let before = (
        labels(&reg, text, pos(0, 22)),
        hover(&reg, text, pos(0, 9)),
        signature_help(&reg, text, pos(0, 22)),
    );
    let _ = complete(&reg, "s", pos(0, 1));
    let _ = hover(&reg, "sort", pos(0, 0));
    let _ = signature_help(&reg, "pow(1, 2", pos(0, 8));
    let after = (
        labels(&reg, text, pos(0, 22)),
        hover(&reg, text, pos(0, 9)),
        signature_help(&reg, text, pos(0, 22)),
    );
    assert_eq!(before, after);
}

// ============================================
// LSP backend
// ============================================

fn position_params(uri: &Url, line: u32, character: u32) -> TextDocumentPositionParams {
    TextDocumentPositionParams {
        text_document: TextDocumentIdentifier { uri: uri.clone() },
        position: pos(line, character),
    }
}

#[tokio::test]
async fn test_backend_uses_configured_scan() {
    let config = ServerConfig {
        active_parameter_scan: ParamScan::Document,
        ..ServerConfig::default()
    };
    let registry = Arc::new(Registry::builtin());
    let (service, _socket) = LspService::new(move |client| Backend::new(client, registry, config));
    let backend = service.inner();
    backend.initialize(InitializeParams::default()).await.unwrap();

    let uri = Url::parse("file:///tmp/pipeline.spq").unwrap();
    backend
        .did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri.clone(),
                language_id: "spq".to_string(),
                version: 1,
                text: "values pow(2)\n| values join(a, b)".to_string(),
            },
        })
        .await;

    let help = backend
        .signature_help(SignatureHelpParams {
            context: None,
            text_document_position_params: position_params(&uri, 0, 12),
            work_done_progress_params: Default::default(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(help.signatures[0].label, "pow(base: number, exp: number) -> number");
    assert_eq!(help.active_parameter, Some(1));

    let completion = backend
        .completion(CompletionParams {
            text_document_position: position_params(&uri, 1, 6),
            work_done_progress_params: Default::default(),
            partial_result_params: Default::default(),
            context: None,
        })
        .await
        .unwrap();
    let Some(CompletionResponse::Array(items)) = completion else {
        panic!("expected completion array");
    };
    let labels: Vec<_> = items.iter().map(|item| item.label.as_str()).collect();
    // keywords come before operators
    assert_eq!(labels, vec!["value", "values"]);
}

#[tokio::test]
async fn test_backend_requests_on_unknown_document() {
    let registry = Arc::new(Registry::builtin());
    let (service, _socket) =
        LspService::new(move |client| Backend::new(client, registry, ServerConfig::default()));
    let uri = Url::parse("file:///tmp/never-opened.spq").unwrap();
    let hover = service
        .inner()
        .hover(HoverParams {
            text_document_position_params: position_params(&uri, 0, 0),
            work_done_progress_params: Default::default(),
        })
        .await
        .unwrap();
    assert!(hover.is_none());
}
