//! Name extraction from the upstream PEG grammar
//!
//! The grammar is regular enough that plain line and byte scanning finds
//! every rule this tool cares about; nothing here parses PEG properly.

/// The four name tables written to `grammar.rs`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarTables {
    pub keywords: Vec<String>,
    pub operators: Vec<String>,
    pub primitive_types: Vec<String>,
    pub sql_types: Vec<String>,
}

impl GrammarTables {
    /// Extract every table. A name claimed by an operator or a type is
    /// dropped from the keywords.
    pub fn extract(peg: &str) -> Self {
        let operators = extract_operators(peg);
        let primitive_types = extract_primitive_types(peg);
        let sql_types = extract_sql_types(peg);

        let keywords = extract_keywords(peg)
            .into_iter()
            .filter(|kw| {
                !operators.contains(kw) && !primitive_types.contains(kw) && !sql_types.contains(kw)
            })
            .collect();

        Self {
            keywords,
            operators,
            primitive_types,
            sql_types,
        }
    }
}

/// Rules of the form `ALL_CAPS = "..."i !IdentifierRest`
pub fn extract_keywords(peg: &str) -> Vec<String> {
    let mut keywords: Vec<String> = peg
        .lines()
        .filter(|line| line.as_bytes().first().is_some_and(u8::is_ascii_uppercase))
        .filter(|line| is_all_caps(scan_ident(line)))
        .filter(|line| line.contains("!IdentifierRest"))
        .filter_map(extract_case_insensitive_literal)
        .map(str::to_lowercase)
        .collect();
    keywords.sort();
    keywords
}

/// `...Op` rule references inside the `Operator` rule, minus the `Op`
pub fn extract_operators(peg: &str) -> Vec<String> {
    let Some(block) = find_rule_block(peg, "Operator") else {
        return Vec::new();
    };

    let mut ops: Vec<String> = Vec::new();
    for word in block.split_whitespace() {
        // labelled references: `op:SQLOp`
        let word = word.split_once(':').map_or(word, |(_, rest)| rest);
        let Some(stem) = word.strip_suffix("Op") else {
            continue;
        };
        if !word.as_bytes()[0].is_ascii_uppercase() || word == "SQLOp" || word == "EndOfOp" {
            continue;
        }
        let op = stem.to_lowercase();
        if !ops.contains(&op) {
            ops.push(op);
        }
    }
    ops.sort();
    ops
}

/// Case-sensitive literals of the `PrimitiveType` rule
pub fn extract_primitive_types(peg: &str) -> Vec<String> {
    let Some(block) = find_rule_block(peg, "PrimitiveType") else {
        return Vec::new();
    };
    let mut types = extract_literals(&block, false);
    types.sort();
    types
}

/// Leading `"..."i` literal of each `PostgreSQLPrimitiveType` alternative.
///
/// Later literals on the same line (e.g. `!"a"i` lookaheads) are ignored.
pub fn extract_sql_types(peg: &str) -> Vec<String> {
    let Some(block) = find_rule_block(peg, "PostgreSQLPrimitiveType") else {
        return Vec::new();
    };

    let mut types: Vec<String> = Vec::new();
    for line in block.lines().map(str::trim) {
        if !line.starts_with(['=', '/']) {
            continue;
        }
        let Some(value) = extract_case_insensitive_literal(line) else {
            continue;
        };
        let ty = value.to_lowercase();
        if !types.contains(&ty) {
            types.push(ty);
        }
    }
    types.sort();
    types
}

/// Text of a rule, from its name line up to the next line that starts a rule
pub fn find_rule_block(peg: &str, rule: &str) -> Option<String> {
    let lines: Vec<&str> = peg.split('\n').collect();
    let start = lines.iter().position(|line| scan_ident(line) == rule)?;

    let end = lines[start + 1..]
        .iter()
        .position(|line| line.as_bytes().first().is_some_and(u8::is_ascii_alphabetic))
        .map_or(lines.len(), |offset| start + 1 + offset);

    Some(lines[start..end].join("\n"))
}

/// String literals outside `{ ... }` action blocks.
///
/// `case_insensitive` selects `"..."i` literals; otherwise only plain ones
/// are returned. Go strings inside action blocks are skipped so their
/// braces do not unbalance the depth.
pub fn extract_literals(block: &str, case_insensitive: bool) -> Vec<String> {
    let bytes = block.as_bytes();
    let mut results = Vec::new();
    let mut brace_depth = 0usize;
    let mut in_go_str = false;
    let mut i = 0;

    while i < bytes.len() {
        let ch = bytes[i];

        if !in_go_str {
            if ch == b'{' {
                brace_depth += 1;
                i += 1;
                continue;
            }
            if ch == b'}' && brace_depth > 0 {
                brace_depth -= 1;
                i += 1;
                continue;
            }
        }

        if brace_depth > 0 {
            if ch == b'"' {
                in_go_str = !in_go_str;
            } else if ch == b'\\' && in_go_str {
                i += 1;
            }
            i += 1;
            continue;
        }

        if ch == b'"' {
            let Some(len) = block[i + 1..].find('"') else {
                break;
            };
            let value = &block[i + 1..i + 1 + len];
            let next = i + len + 2;
            let insensitive = bytes.get(next) == Some(&b'i');
            if insensitive == case_insensitive && !value.is_empty() {
                results.push(value.to_string());
            }
            i = next + usize::from(insensitive);
            continue;
        }
        i += 1;
    }
    results
}

/// First `"..."i` literal on a line
pub fn extract_case_insensitive_literal(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'"' {
            i += 1;
            continue;
        }
        let len = line[i + 1..].find('"')?;
        let next = i + len + 2;
        if bytes.get(next) == Some(&b'i') {
            return Some(&line[i + 1..i + 1 + len]);
        }
        i = next + 1;
    }
    None
}

/// Leading identifier of a line
pub fn scan_ident(s: &str) -> &str {
    let end = s
        .bytes()
        .enumerate()
        .find(|&(i, b)| !(b.is_ascii_alphabetic() || b == b'_' || (i > 0 && b.is_ascii_digit())))
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}

fn is_all_caps(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'_' || b.is_ascii_uppercase())
}
