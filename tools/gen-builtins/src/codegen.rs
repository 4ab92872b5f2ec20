//! Rendering of `superlsp/src/registry/grammar.rs`

use chrono::{DateTime, SecondsFormat, Utc};

use crate::peg::GrammarTables;

pub fn render(tables: &GrammarTables, upstream_version: &str, generated_at: DateTime<Utc>) -> String {
    let mut output = String::new();
    output.push_str("// Code generated by gen-builtins; DO NOT EDIT.\n");
    output.push_str(&format!("// Source: brimdata/super@{upstream_version}\n"));
    output.push_str(&format!(
        "// Generated: {}\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));

    let sections = [
        ("Keywords", "KEYWORDS", &tables.keywords),
        ("Operators", "OPERATORS", &tables.operators),
        ("Primitive types", "PRIMITIVE_TYPES", &tables.primitive_types),
        ("SQL type aliases", "SQL_TYPES", &tables.sql_types),
    ];
    for (title, name, names) in sections {
        output.push('\n');
        output.push_str(&format!("/// {title}\n"));
        output.push_str(&format!("pub const {name}: &[&str] = &[\n"));
        for entry in names {
            output.push_str(&format!("    {entry:?},\n"));
        }
        output.push_str("];\n");
    }
    output
}
