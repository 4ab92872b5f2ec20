//! Hover documentation for the element under the cursor

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};
use tracing::debug;

use crate::registry::{ElementKind, LanguageElement, Registry};
use crate::scanner;

/// Markdown hover for the registry element under the cursor
pub fn hover(registry: &Registry, text: &str, position: Position) -> Option<Hover> {
    let word = scanner::word_at(text, position)?;
    let element = registry.lookup(word.text)?;
    debug!(word = word.text, kind = element.kind.label(), "hover");

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: format_hover(element),
        }),
        range: Some(word.range),
    })
}

/// Render an element as hover markdown
pub fn format_hover(element: &LanguageElement) -> String {
    match element.kind {
        ElementKind::Function | ElementKind::Aggregate => format_callable(element),
        ElementKind::Keyword | ElementKind::Operator | ElementKind::Type => format_labelled(element),
    }
}

fn format_callable(element: &LanguageElement) -> String {
    match element.signature() {
        Some(sig) => format!("```spq\n{}\n```\n\n{}", sig, element.documentation()),
        None => format_labelled(element),
    }
}

fn format_labelled(element: &LanguageElement) -> String {
    format!("**{}** ({})\n\n{}", element.name, element.kind.label(), element.brief)
}
