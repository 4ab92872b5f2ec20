// Code generated by gen-builtins; DO NOT EDIT.
// Source: brimdata/super@v0.0.0-20250610150421-e8764da3c2b1
// Generated: 2025-06-12T09:41:27Z

/// Keywords
pub const KEYWORDS: &[&str] = &[
    "all",
    "and",
    "anti",
    "as",
    "asc",
    "at",
    "between",
    "by",
    "call",
    "case",
    "cast",
    "const",
    "cross",
    "default",
    "desc",
    "distinct",
    "else",
    "end",
    "enum",
    "exists",
    "extract",
    "false",
    "first",
    "for",
    "func",
    "group",
    "having",
    "in",
    "inner",
    "is",
    "last",
    "left",
    "like",
    "limit",
    "map",
    "not",
    "nulls",
    "offset",
    "on",
    "op",
    "or",
    "order",
    "ordinality",
    "outer",
    "pragma",
    "recursive",
    "right",
    "select",
    "set",
    "then",
    "true",
    "union",
    "using",
    "value",
    "when",
    "with",
];

/// Operators
pub const OPERATORS: &[&str] = &[
    "aggregate",
    "assert",
    "cut",
    "debug",
    "drop",
    "explode",
    "fork",
    "from",
    "fuse",
    "head",
    "join",
    "load",
    "merge",
    "output",
    "pass",
    "put",
    "rename",
    "sample",
    "search",
    "skip",
    "sort",
    "switch",
    "tail",
    "top",
    "uniq",
    "unnest",
    "values",
    "where",
];

/// Primitive types
pub const PRIMITIVE_TYPES: &[&str] = &[
    "bool",
    "bytes",
    "duration",
    "float16",
    "float32",
    "float64",
    "int16",
    "int32",
    "int64",
    "int8",
    "ip",
    "net",
    "null",
    "string",
    "time",
    "type",
    "uint16",
    "uint32",
    "uint64",
    "uint8",
];

/// SQL type aliases
pub const SQL_TYPES: &[&str] = &[
    "bigint",
    "boolean",
    "bytea",
    "char",
    "date",
    "double",
    "float",
    "int",
    "integer",
    "interval",
    "real",
    "smallint",
    "text",
    "timestamp",
    "varchar",
];
