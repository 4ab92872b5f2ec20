//! Signature help for the innermost enclosing call
//!
//! The call is recovered by walking parentheses backwards from the cursor,
//! then the active parameter is found by counting top-level commas after the
//! call's open paren.

use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::{
    Documentation, MarkupContent, MarkupKind, ParameterInformation, ParameterLabel, Position,
    SignatureHelp, SignatureInformation,
};
use tracing::debug;

use crate::registry::{LanguageElement, Registry};
use crate::scanner;

/// How far the active-parameter comma count reaches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamScan {
    /// Count commas between the open paren and the cursor
    #[default]
    Cursor,
    /// Count commas from the open paren to the end of the document.
    ///
    /// This is the scan as written in the server's documentation, not the
    /// behaviour editors received, which only ever counted up to the cursor
    /// (`Cursor`). Over-counts when the call is closed and more calls follow.
    Document,
}

impl std::str::FromStr for ParamScan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cursor" => Ok(ParamScan::Cursor),
            "document" => Ok(ParamScan::Document),
            other => Err(format!("unknown parameter scan `{other}` (expected cursor or document)")),
        }
    }
}

/// Enclosing call found left of the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub name: &'a str,
    /// Byte offset of the call's `(` in the text
    pub open_paren: usize,
}

/// Signature help using the cursor-bounded parameter count
pub fn signature_help(registry: &Registry, text: &str, position: Position) -> Option<SignatureHelp> {
    signature_help_with(registry, text, position, ParamScan::default())
}

pub fn signature_help_with(
    registry: &Registry,
    text: &str,
    position: Position,
    scan: ParamScan,
) -> Option<SignatureHelp> {
    let cursor = text_offset(text, position)?;
    let before = &text[..cursor];

    let call = enclosing_call(before)?;
    let element = registry.lookup(call.name)?;
    if !element.kind.is_callable() {
        return None;
    }
    element.signature()?;

    let scanned = match scan {
        ParamScan::Cursor => before,
        ParamScan::Document => text,
    };
    let active = count_top_level_commas(&scanned[call.open_paren + 1..]);
    debug!(function = call.name, active, ?scan, "signature help");

    Some(build_signature_help(element, active))
}

/// Byte offset of `position` in the whole text.
///
/// Lines are split on `\n`, so prior lines contribute their length plus one.
fn text_offset(text: &str, position: Position) -> Option<usize> {
    let mut offset = 0;
    for (idx, line) in text.split('\n').enumerate() {
        if idx == position.line as usize {
            return scanner::utf16_to_byte(line, position.character).map(|col| offset + col);
        }
        offset += line.len() + 1;
    }
    None
}

/// Walk backwards to the innermost unclosed `(` and read the name before it
pub fn enclosing_call(before_cursor: &str) -> Option<CallSite<'_>> {
    let bytes = before_cursor.as_bytes();
    let mut depth = 0usize;
    let mut open_paren = None;

    for (idx, &b) in bytes.iter().enumerate().rev() {
        match b {
            b')' => depth += 1,
            b'(' if depth == 0 => {
                open_paren = Some(idx);
                break;
            }
            b'(' => depth -= 1,
            _ => {}
        }
    }

    let open_paren = open_paren?;
    let mut start = open_paren;
    while start > 0 && scanner::is_ident_char(bytes[start - 1]) {
        start -= 1;
    }
    if start == open_paren {
        // grouping parenthesis, not a call
        return None;
    }

    Some(CallSite {
        name: &before_cursor[start..open_paren],
        open_paren,
    })
}

/// Commas at nesting depth zero
fn count_top_level_commas(args: &str) -> usize {
    let mut depth = 0isize;
    let mut commas = 0;
    for b in args.bytes() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b',' if depth == 0 => commas += 1,
            _ => {}
        }
    }
    commas
}

/// Build the single-signature payload with parameter offsets in UTF-16 units
pub fn build_signature_help(element: &LanguageElement, active: usize) -> SignatureHelp {
    let label = element.signature().unwrap_or_default();

    let parameters: Vec<ParameterInformation> = element
        .parameters
        .iter()
        .zip(element.parameter_spans())
        .map(|(param, span)| ParameterInformation {
            label: match span {
                Some(span) => ParameterLabel::LabelOffsets([
                    scanner::byte_to_utf16(label, span.start),
                    scanner::byte_to_utf16(label, span.end),
                ]),
                None => ParameterLabel::Simple(param.name.clone()),
            },
            documentation: Some(plain(&param.doc)),
        })
        .collect();

    let active = active.min(parameters.len().saturating_sub(1));

    SignatureHelp {
        signatures: vec![SignatureInformation {
            label: label.to_string(),
            documentation: Some(plain(element.documentation())),
            parameters: Some(parameters),
            active_parameter: None,
        }],
        active_signature: Some(0),
        active_parameter: Some(active as u32),
    }
}

fn plain(value: &str) -> Documentation {
    Documentation::MarkupContent(MarkupContent {
        kind: MarkupKind::PlainText,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ElementKind;

    fn registry() -> Registry {
        Registry::from_sources(
            vec![LanguageElement::stub("select", ElementKind::Keyword)],
            vec![
                LanguageElement::function(
                    "f",
                    "Test function",
                    "A function for tests",
                    "f(a: int, b: string) -> bool",
                    &[("a", "first"), ("b", "second")],
                ),
                LanguageElement::function("now", "Current timestamp", "", "now() -> time", &[]),
                LanguageElement::function(
                    "lower",
                    "Convert to lowercase",
                    "Convert a string to lowercase",
                    "lower(value: string) -> string",
                    &[("value", "String to convert")],
                ),
            ],
        )
    }

    fn help(text: &str, line: u32, character: u32) -> Option<SignatureHelp> {
        signature_help(&registry(), text, Position::new(line, character))
    }

    fn offsets(help: &SignatureHelp) -> Vec<[u32; 2]> {
        help.signatures[0]
            .parameters
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| match p.label {
                ParameterLabel::LabelOffsets(o) => o,
                ParameterLabel::Simple(_) => panic!("expected offsets"),
            })
            .collect()
    }

    #[test]
    fn test_first_parameter_after_open_paren() {
        let h = help("f(", 0, 2).unwrap();
        assert_eq!(h.active_parameter, Some(0));
        assert_eq!(h.active_signature, Some(0));
        let spans = offsets(&h);
        assert_eq!(spans, vec![[2, 8], [10, 19]]);
        assert!(spans[0][1] <= spans[1][0]);
        assert_eq!(h.signatures[0].label, "f(a: int, b: string) -> bool");
    }

    #[test]
    fn test_second_parameter_after_comma() {
        let h = help("f(1, ", 0, 5).unwrap();
        assert_eq!(h.active_parameter, Some(1));
    }

    #[test]
    fn test_nested_call_commas_ignored() {
        let h = help("f(lower(x, y), ", 0, 15).unwrap();
        assert_eq!(h.active_parameter, Some(1));
        let inner = help("f(1, lower(x", 0, 12).unwrap();
        assert_eq!(inner.signatures[0].label, "lower(value: string) -> string");
    }

    #[test]
    fn test_active_parameter_is_clamped() {
        let h = help("f(1, 2, 3, ", 0, 11).unwrap();
        assert_eq!(h.active_parameter, Some(1));
        let none = help("now(1, ", 0, 7).unwrap();
        assert_eq!(none.active_parameter, Some(0));
        assert_eq!(none.signatures[0].parameters.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn test_call_spanning_lines() {
        let text = "values f(\n  1,\n  ";
        let h = help(text, 2, 2).unwrap();
        assert_eq!(h.active_parameter, Some(1));
    }

    #[test]
    fn test_closed_call_is_skipped() {
        assert!(help("lower(x) ", 0, 9).is_none());
        let h = help("f(lower(x), ", 0, 12).unwrap();
        assert_eq!(h.signatures[0].label, "f(a: int, b: string) -> bool");
    }

    #[test]
    fn test_absent_cases() {
        // grouping parenthesis
        assert!(help("x + (1)", 0, 6).is_none());
        // keyword, not a function
        assert!(help("select(", 0, 7).is_none());
        // unknown function
        assert!(help("nope(", 0, 5).is_none());
        assert!(help("", 0, 0).is_none());
        assert!(help("f(", 1, 0).is_none());
        assert!(help("f(", 0, 9).is_none());
    }

    #[test]
    fn test_case_insensitive_function_name() {
        assert!(help("LOWER(", 0, 6).is_some());
    }

    #[test]
    fn test_document_scan_counts_past_cursor() {
        let text = "f(1) | values g(3, 4)";
        let cursor = Position::new(0, 3);
        let bounded = signature_help_with(&registry(), text, cursor, ParamScan::Cursor).unwrap();
        assert_eq!(bounded.active_parameter, Some(0));
        // the closing paren drops depth below zero, so the inside of `g(3, 4)`
        // sits at depth zero and its comma is counted
        let parity = signature_help_with(&registry(), text, cursor, ParamScan::Document).unwrap();
        assert_eq!(parity.active_parameter, Some(1));
    }

    #[test]
    fn test_unlocatable_parameter_gets_simple_label() {
        let el = LanguageElement::function("g", "", "", "g(x: int) -> int", &[("y", "missing")]);
        let h = build_signature_help(&el, 0);
        let params = h.signatures[0].parameters.as_ref().unwrap();
        assert_eq!(params[0].label, ParameterLabel::Simple("y".to_string()));
    }

    #[test]
    fn test_enclosing_call() {
        assert_eq!(
            enclosing_call("where has(r, lower("),
            Some(CallSite { name: "lower", open_paren: 18 })
        );
        assert_eq!(enclosing_call("where has(r, x)"), None);
    }

    #[test]
    fn test_param_scan_from_str() {
        assert_eq!("Document".parse::<ParamScan>(), Ok(ParamScan::Document));
        assert!("everything".parse::<ParamScan>().is_err());
    }
}
