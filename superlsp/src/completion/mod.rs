//! Context-filtered completion
//!
//! Candidates come straight from the registry: filtered by the identifier
//! prefix left of the cursor, restricted by the line context, and emitted in
//! registry order. Ranking is left to the editor.

use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, InsertTextFormat, Position};
use tracing::debug;

use crate::registry::{ElementKind, LanguageElement, Registry};
use crate::scanner::{self, CompletionContext};

/// Completion candidates at `position`; empty when the position is out of range
pub fn complete(registry: &Registry, text: &str, position: Position) -> Vec<CompletionItem> {
    let Some(cursor) = scanner::cursor_at(text, position) else {
        return Vec::new();
    };

    let prefix = scanner::prefix_at(cursor.line, cursor.offset).to_ascii_lowercase();
    let context = scanner::context_of(cursor.before());
    debug!(?position, %prefix, ?context, "completion");

    let kinds: &[ElementKind] = match context {
        CompletionContext::Type => &[ElementKind::Type],
        CompletionContext::Function => &[ElementKind::Function, ElementKind::Aggregate],
        CompletionContext::General => &ElementKind::ALL,
    };

    kinds
        .iter()
        .flat_map(|&kind| registry.by_kind(kind))
        .filter(|element| matches_prefix(element, &prefix))
        .map(completion_item)
        .collect()
}

/// Literal, case-insensitive leading match; an empty prefix matches everything
fn matches_prefix(element: &LanguageElement, prefix: &str) -> bool {
    prefix.is_empty() || element.name.to_ascii_lowercase().starts_with(prefix)
}

fn completion_item(element: &LanguageElement) -> CompletionItem {
    // `<tag>: <brief>`; with an empty brief the detail is the bare tag rather
    // than `<tag>: ` with a dangling separator.
    let tagged = |tag: &str| {
        if element.brief.is_empty() {
            tag.to_string()
        } else {
            format!("{}: {}", tag, element.brief)
        }
    };

    match element.kind {
        ElementKind::Keyword => CompletionItem {
            label: element.name.clone(),
            kind: Some(CompletionItemKind::KEYWORD),
            detail: (!element.brief.is_empty()).then(|| element.brief.clone()),
            ..Default::default()
        },
        ElementKind::Operator => CompletionItem {
            label: element.name.clone(),
            kind: Some(CompletionItemKind::FUNCTION),
            detail: Some(tagged("operator")),
            ..Default::default()
        },
        ElementKind::Function | ElementKind::Aggregate => CompletionItem {
            label: element.name.clone(),
            kind: Some(CompletionItemKind::FUNCTION),
            detail: Some(tagged(element.kind.label())),
            insert_text: Some(format!("{}($1)", element.name)),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            ..Default::default()
        },
        ElementKind::Type => CompletionItem {
            label: element.name.clone(),
            kind: Some(CompletionItemKind::CLASS),
            detail: Some(tagged("type")),
            ..Default::default()
        },
    }
}
