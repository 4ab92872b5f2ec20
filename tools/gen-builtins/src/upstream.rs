//! Function and aggregate names from upstream Go sources
//!
//! Parses `function.go` and `agg.go` with tree-sitter-go and reads the case
//! labels of the first expression `switch` in `func New` / `func NewPattern`.
//! Type switches are stepped over, as are statements nested below a case body.

use tree_sitter::{Node, Parser, Tree};

use crate::error::{GenError, Result};

/// A scalar function registered upstream, with its declared arity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamFunction {
    pub name: String,
    pub argmin: i64,
    pub argmax: i64,
}

/// Case labels and arity of the first expression switch in `func New`
pub fn extract_functions(file: &str, src: &str) -> Result<Vec<UpstreamFunction>> {
    let tree = parse(file, src)?;
    let switch = first_switch(file, src, &tree, "New")?;

    Ok(case_clauses(switch)
        .into_iter()
        .flat_map(|clause| {
            let (argmin, argmax) = arity(src, clause);
            labels(src, clause).into_iter().map(move |name| UpstreamFunction {
                name,
                argmin,
                argmax,
            })
        })
        .collect())
}

/// Sorted case labels of the first expression switch in `func NewPattern`
pub fn extract_aggregates(file: &str, src: &str) -> Result<Vec<String>> {
    let tree = parse(file, src)?;
    let switch = first_switch(file, src, &tree, "NewPattern")?;

    let mut names: Vec<String> = case_clauses(switch)
        .into_iter()
        .flat_map(|clause| labels(src, clause))
        .collect();
    names.sort();
    Ok(names)
}

fn parse(file: &str, src: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| GenError::upstream(file, format!("loading Go grammar: {e}")))?;
    let tree = parser
        .parse(src, None)
        .ok_or_else(|| GenError::upstream(file, "parse aborted"))?;

    if tree.root_node().has_error() {
        let line = find_preorder(tree.root_node(), &|n: Node<'_>| n.is_error() || n.is_missing())
            .map_or(1, |bad| bad.start_position().row + 1);
        return Err(GenError::upstream(file, format!("syntax error at line {line}")));
    }
    Ok(tree)
}

fn first_switch<'t>(file: &str, src: &str, tree: &'t Tree, func: &str) -> Result<Node<'t>> {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let decl = root
        .named_children(&mut cursor)
        .filter(|n| matches!(n.kind(), "function_declaration" | "method_declaration"))
        .find(|n| {
            n.child_by_field_name("name")
                .is_some_and(|name| text(src, name) == func)
        })
        .ok_or_else(|| GenError::upstream(file, format!("func {func} not found")))?;

    decl.child_by_field_name("body")
        .and_then(|body| {
            find_preorder(body, &|n: Node<'_>| n.kind() == "expression_switch_statement")
        })
        .ok_or_else(|| GenError::upstream(file, format!("switch statement not found in func {func}")))
}

/// First node in depth-first pre-order matching `pred`
fn find_preorder<'t>(node: Node<'t>, pred: &dyn Fn(Node<'t>) -> bool) -> Option<Node<'t>> {
    if pred(node) {
        return Some(node);
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find_map(|child| find_preorder(child, pred));
    found
}

/// `case` clauses of a switch in source order; `default` is skipped
fn case_clauses(switch: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = switch.walk();
    switch
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "expression_case")
        .collect()
}

/// String literal labels of a clause, unquoted; other expressions are skipped
fn labels(src: &str, clause: Node<'_>) -> Vec<String> {
    let Some(values) = clause.child_by_field_name("value") else {
        return Vec::new();
    };
    list_items(values)
        .into_iter()
        .filter(|v| matches!(v.kind(), "interpreted_string_literal" | "raw_string_literal"))
        .filter_map(|v| unquote(text(src, v)))
        .collect()
}

/// `argmin`/`argmax` assignments directly in a case body; both default to 1
fn arity(src: &str, clause: Node<'_>) -> (i64, i64) {
    let (mut argmin, mut argmax) = (1, 1);
    for stmt in statements(clause) {
        if !matches!(stmt.kind(), "assignment_statement" | "short_var_declaration") {
            continue;
        }
        let (Some(left), Some(right)) = (
            stmt.child_by_field_name("left"),
            stmt.child_by_field_name("right"),
        ) else {
            continue;
        };
        let (names, values) = (list_items(left), list_items(right));
        if names.len() != values.len() || names.len() > 2 {
            continue;
        }
        for (name, value) in names.into_iter().zip(values) {
            if name.kind() != "identifier" {
                continue;
            }
            match text(src, name) {
                "argmin" => argmin = int_value(src, value),
                "argmax" => argmax = int_value(src, value),
                _ => {}
            }
        }
    }
    (argmin, argmax)
}

/// Top-level statements of a case body
fn statements(clause: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = clause.walk();
    let mut stmts = Vec::new();
    for child in clause.named_children(&mut cursor) {
        if child.kind() == "statement_list" {
            let mut inner = child.walk();
            stmts.extend(child.named_children(&mut inner));
        } else {
            stmts.push(child);
        }
    }
    stmts
}

/// Elements of an `expression_list`, or the node itself
fn list_items(node: Node<'_>) -> Vec<Node<'_>> {
    if node.kind() != "expression_list" {
        return vec![node];
    }
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}

/// Decimal integer literal, optionally negated; anything else counts as 0
fn int_value(src: &str, expr: Node<'_>) -> i64 {
    let literal = |n: Node<'_>| text(src, n).parse::<i64>().unwrap_or(0);
    match expr.kind() {
        "int_literal" => literal(expr),
        "unary_expression" => {
            let negated = expr
                .child_by_field_name("operator")
                .is_some_and(|op| op.kind() == "-");
            match expr.child_by_field_name("operand") {
                Some(operand) if negated && operand.kind() == "int_literal" => -literal(operand),
                _ => 0,
            }
        }
        _ => 0,
    }
}

fn text<'s>(src: &'s str, node: Node<'_>) -> &'s str {
    &src[node.byte_range()]
}

/// Value of a Go string literal, or `None` when an escape is malformed.
///
/// `\x` and octal escapes are single bytes, so a label that does not end up
/// as valid UTF-8 is dropped too.
fn unquote(lit: &str) -> Option<String> {
    if let Some(raw) = lit.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
        return Some(raw.replace('\r', ""));
    }
    let body = lit.strip_prefix('"')?.strip_suffix('"')?;

    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut out, c);
            continue;
        }
        match chars.next()? {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            'x' => out.push(u8::try_from(digits(&mut chars, 2, 16)?).ok()?),
            'u' => push_char(&mut out, char::from_u32(digits(&mut chars, 4, 16)?)?),
            'U' => push_char(&mut out, char::from_u32(digits(&mut chars, 8, 16)?)?),
            d @ '0'..='7' => {
                let value = d.to_digit(8)? * 64 + digits(&mut chars, 2, 8)?;
                out.push(u8::try_from(value).ok()?);
            }
            _ => return None,
        }
    }
    String::from_utf8(out).ok()
}

fn digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    (0..count).try_fold(0u32, |acc, _| Some(acc * radix + chars.next()?.to_digit(radix)?))
}

fn push_char(out: &mut Vec<u8>, c: char) {
    out.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes());
}
