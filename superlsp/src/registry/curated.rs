//! Curated function and aggregate table
//!
//! Hand-maintained docs, signatures and parameters. Keep each entry's
//! parameter list in the same order as the names appear in its signature;
//! `Registry::validate` checks this and `gen-builtins` diffs this table
//! against upstream.

use super::LanguageElement;

pub(super) fn elements() -> Vec<LanguageElement> {
    vec![
        // ============================================
        // Scalar functions
        // ============================================
        LanguageElement::function(
            "abs",
            "Absolute value",
            "Returns the absolute value of a number",
            "abs(value: number) -> number",
            &[("value", "Numeric value")],
        ),
        LanguageElement::function(
            "base64",
            "Base64 encode/decode",
            "Encode or decode base64 data",
            "base64(value: bytes|string) -> string",
            &[("value", "Value to encode/decode")],
        ),
        LanguageElement::function(
            "bucket",
            "Bucket values into ranges",
            "Bucket numeric values into fixed-size ranges",
            "bucket(value: number, size: number) -> number",
            &[("value", "Value to bucket"), ("size", "Bucket size")],
        ),
        LanguageElement::function(
            "ceil",
            "Ceiling function",
            "Round up to the nearest integer",
            "ceil(value: number) -> number",
            &[("value", "Numeric value")],
        ),
        LanguageElement::function(
            "cidr_match",
            "Match IP against CIDR",
            "Check if an IP address matches a CIDR network",
            "cidr_match(network: net, ip: ip) -> bool",
            &[("network", "CIDR network"), ("ip", "IP address to check")],
        ),
        LanguageElement::function(
            "coalesce",
            "First non-null value",
            "Return the first non-null value from arguments",
            "coalesce(value: any, ...) -> any",
            &[("value", "Values to check")],
        ),
        LanguageElement::function(
            "concat",
            "Concatenate strings",
            "Concatenate multiple strings into one",
            "concat(values: string, ...) -> string",
            &[("values", "Strings to concatenate")],
        ),
        LanguageElement::function(
            "compare",
            "Compare two values",
            "Compare two values, returning -1, 0, or 1",
            "compare(a: any, b: any) -> int64",
            &[("a", "First value"), ("b", "Second value")],
        ),
        LanguageElement::function(
            "date_part",
            "Extract date component",
            "Extract a component (year, month, day, etc.) from a timestamp",
            "date_part(part: string, time: time) -> int64",
            &[("part", "Part name (year, month, day, hour, minute, second)"), ("time", "Timestamp value")],
        ),
        LanguageElement::function(
            "fields",
            "Get record field names",
            "Return the field names of a record as an array",
            "fields(record: record) -> [string]",
            &[("record", "Record value")],
        ),
        LanguageElement::function(
            "flatten",
            "Flatten nested records",
            "Flatten nested record structure into dotted field names",
            "flatten(record: record) -> record",
            &[("record", "Record to flatten")],
        ),
        LanguageElement::function(
            "floor",
            "Floor function",
            "Round down to the nearest integer",
            "floor(value: number) -> number",
            &[("value", "Numeric value")],
        ),
        LanguageElement::function(
            "grep",
            "Search with pattern",
            "Search for a pattern in a value",
            "grep(pattern: string|regexp, value: any) -> bool",
            &[("pattern", "Search pattern"), ("value", "Value to search")],
        ),
        LanguageElement::function(
            "grok",
            "Parse with grok pattern",
            "Parse a string using a grok pattern",
            "grok(pattern: string, value: string) -> record",
            &[("pattern", "Grok pattern"), ("value", "String to parse")],
        ),
        LanguageElement::function(
            "has",
            "Check if field exists",
            "Check if a record has a specific field",
            "has(record: record, field: string) -> bool",
            &[("record", "Record to check"), ("field", "Field name")],
        ),
        LanguageElement::function(
            "has_error",
            "Check for error",
            "Check if a value contains a nested error",
            "has_error(value: any) -> bool",
            &[("value", "Value to check")],
        ),
        LanguageElement::function(
            "hex",
            "Hexadecimal conversion",
            "Convert bytes or string to hexadecimal",
            "hex(value: bytes|string) -> string",
            &[("value", "Value to convert")],
        ),
        LanguageElement::function(
            "is",
            "Type check function",
            "Check if a value is of a specific type",
            "is(value: any, type: type) -> bool",
            &[("value", "Value to check"), ("type", "Type to check against")],
        ),
        LanguageElement::function(
            "is_error",
            "Check if value is error",
            "Check if a value is an error",
            "is_error(value: any) -> bool",
            &[("value", "Value to check")],
        ),
        LanguageElement::function(
            "join",
            "Join strings",
            "Join an array of strings with a separator",
            "join(array: [string], sep: string) -> string",
            &[("array", "Array of strings"), ("sep", "Separator")],
        ),
        LanguageElement::function(
            "kind",
            "Get value kind",
            "Return the kind of a value (primitive, record, array, etc.)",
            "kind(value: any) -> string",
            &[("value", "Value to check")],
        ),
        LanguageElement::function(
            "ksuid",
            "Generate KSUID",
            "Generate a K-Sortable Unique Identifier",
            "ksuid() -> string",
            &[],
        ),
        LanguageElement::function(
            "len",
            "Length of value",
            "Return the length of a string, bytes, or array",
            "len(value: string|bytes|array) -> int64",
            &[("value", "Value to measure")],
        ),
        LanguageElement::function(
            "length",
            "Length of value (alias)",
            "Return the length of a string, bytes, or array (alias for len)",
            "length(value: string|bytes|array) -> int64",
            &[("value", "Value to measure")],
        ),
        LanguageElement::function(
            "levenshtein",
            "Levenshtein distance",
            "Calculate the Levenshtein edit distance between two strings",
            "levenshtein(a: string, b: string) -> int64",
            &[("a", "First string"), ("b", "Second string")],
        ),
        LanguageElement::function(
            "log",
            "Logarithm",
            "Calculate the logarithm of a number",
            "log(value: number, base?: number) -> float64",
            &[("value", "Numeric value"), ("base", "Log base (default: e)")],
        ),
        LanguageElement::function(
            "lower",
            "Convert to lowercase",
            "Convert a string to lowercase",
            "lower(value: string) -> string",
            &[("value", "String to convert")],
        ),
        LanguageElement::function(
            "missing",
            "Create missing value",
            "Create a missing value of optional type",
            "missing(type?: type) -> missing",
            &[("type", "Optional type")],
        ),
        LanguageElement::function(
            "nameof",
            "Get type name",
            "Return the name of a value's type",
            "nameof(value: any) -> string",
            &[("value", "Value to check")],
        ),
        LanguageElement::function(
            "nest_dotted",
            "Nest dotted field names",
            "Convert dotted field names into nested records",
            "nest_dotted(record: record) -> record",
            &[("record", "Record with dotted names")],
        ),
        LanguageElement::function(
            "network_of",
            "Get network from IP",
            "Get the network address from an IP and mask",
            "network_of(ip: ip, mask: net) -> net",
            &[("ip", "IP address"), ("mask", "Network mask")],
        ),
        LanguageElement::function(
            "now",
            "Current timestamp",
            "Return the current timestamp",
            "now() -> time",
            &[],
        ),
        LanguageElement::function(
            "nullif",
            "Return null if equal",
            "Return null if two values are equal, otherwise return the first value",
            "nullif(a: any, b: any) -> any",
            &[("a", "First value"), ("b", "Value to compare")],
        ),
        LanguageElement::function(
            "parse_sup",
            "Parse Super format",
            "Parse a string in Super format",
            "parse_sup(value: string) -> any",
            &[("value", "String to parse")],
        ),
        LanguageElement::function(
            "parse_uri",
            "Parse URI string",
            "Parse a URI string into its components",
            "parse_uri(uri: string) -> record",
            &[("uri", "URI to parse")],
        ),
        LanguageElement::function(
            "position",
            "Find substring position",
            "Find the position of a substring in a string",
            "position(substr: string, str: string) -> int64",
            &[("substr", "Substring to find"), ("str", "String to search")],
        ),
        LanguageElement::function(
            "pow",
            "Power function",
            "Calculate base raised to the power of exponent",
            "pow(base: number, exp: number) -> number",
            &[("base", "Base value"), ("exp", "Exponent")],
        ),
        LanguageElement::function(
            "quiet",
            "Suppress errors",
            "Suppress errors and return null instead",
            "quiet(value: any) -> any",
            &[("value", "Value to quiet")],
        ),
        LanguageElement::function(
            "regexp",
            "Regular expression match",
            "Match a string against a regular expression",
            "regexp(pattern: string, value: string) -> bool",
            &[("pattern", "Regex pattern"), ("value", "String to match")],
        ),
        LanguageElement::function(
            "regexp_replace",
            "Regex replacement",
            "Replace matches of a regex pattern",
            "regexp_replace(value: string, pattern: string, replacement: string) -> string",
            &[("value", "Input string"), ("pattern", "Regex pattern"), ("replacement", "Replacement string")],
        ),
        LanguageElement::function(
            "replace",
            "String replacement",
            "Replace occurrences of a substring",
            "replace(value: string, old: string, new: string) -> string",
            &[("value", "Input string"), ("old", "String to replace"), ("new", "Replacement string")],
        ),
        LanguageElement::function(
            "round",
            "Round to precision",
            "Round a number to a specified precision",
            "round(value: number, precision?: int64) -> number",
            &[("value", "Numeric value"), ("precision", "Decimal places (default: 0)")],
        ),
        LanguageElement::function(
            "split",
            "Split string",
            "Split a string by a separator",
            "split(value: string, sep: string) -> [string]",
            &[("value", "String to split"), ("sep", "Separator")],
        ),
        LanguageElement::function(
            "sqrt",
            "Square root",
            "Calculate the square root of a number",
            "sqrt(value: number) -> float64",
            &[("value", "Numeric value")],
        ),
        LanguageElement::function(
            "strftime",
            "Format time as string",
            "Format a timestamp as a string using a format specifier",
            "strftime(format: string, time: time) -> string",
            &[("format", "Format string"), ("time", "Timestamp value")],
        ),
        LanguageElement::function(
            "trim",
            "Trim whitespace",
            "Remove leading and trailing whitespace from a string",
            "trim(value: string) -> string",
            &[("value", "String to trim")],
        ),
        LanguageElement::function(
            "typename",
            "Get type name",
            "Return the name of a value's type as a string",
            "typename(value: any) -> string",
            &[("value", "Value to check")],
        ),
        LanguageElement::function(
            "typeof",
            "Get type of value",
            "Return the type of a value",
            "typeof(value: any) -> type",
            &[("value", "Value to check")],
        ),
        LanguageElement::function(
            "under",
            "Get underlying value",
            "Unwrap a value to get its underlying representation",
            "under(value: any) -> any",
            &[("value", "Value to unwrap")],
        ),
        LanguageElement::function(
            "unflatten",
            "Unflatten records",
            "Convert dotted field names back into nested records",
            "unflatten(record: record) -> record",
            &[("record", "Record to unflatten")],
        ),
        LanguageElement::function(
            "upper",
            "Convert to uppercase",
            "Convert a string to uppercase",
            "upper(value: string) -> string",
            &[("value", "String to convert")],
        ),
        LanguageElement::function(
            "cast",
            "Cast value to type",
            "Convert a value to a specified type",
            "cast(value: any, type: type) -> any",
            &[("value", "Value to cast"), ("type", "Target type")],
        ),
        LanguageElement::function(
            "error",
            "Create error value",
            "Create an error value with a message",
            "error(message: string) -> error",
            &[("message", "Error message")],
        ),
        LanguageElement::function(
            "max",
            "Maximum of values",
            "Return the maximum of two values",
            "max(a: number, b: number) -> number",
            &[("a", "First value"), ("b", "Second value")],
        ),
        LanguageElement::function(
            "min",
            "Minimum of values",
            "Return the minimum of two values",
            "min(a: number, b: number) -> number",
            &[("a", "First value"), ("b", "Second value")],
        ),

        // ============================================
        // Aggregates
        // ============================================
        LanguageElement::aggregate(
            "count",
            "Count records",
            "Count the number of records in a group",
            "count() -> int64",
            &[],
        ),
        LanguageElement::aggregate(
            "sum",
            "Sum of values",
            "Calculate the sum of numeric values",
            "sum(value: number) -> number",
            &[("value", "Numeric values")],
        ),
        LanguageElement::aggregate(
            "avg",
            "Average of values",
            "Calculate the average of numeric values",
            "avg(value: number) -> float64",
            &[("value", "Numeric values")],
        ),
        LanguageElement::aggregate(
            "collect",
            "Collect values into array",
            "Collect all values into an array",
            "collect(value: any) -> [any]",
            &[("value", "Values to collect")],
        ),
        LanguageElement::aggregate(
            "collect_map",
            "Collect into map",
            "Collect key-value pairs into a map",
            "collect_map(key: any, value: any) -> map",
            &[("key", "Map keys"), ("value", "Map values")],
        ),
        LanguageElement::aggregate(
            "dcount",
            "Distinct count",
            "Count the number of distinct values",
            "dcount(value: any) -> int64",
            &[("value", "Values to count")],
        ),
        LanguageElement::aggregate(
            "any",
            "Any value from group",
            "Return any arbitrary value from a group",
            "any(value: any) -> any",
            &[("value", "Values to choose from")],
        ),
        LanguageElement::aggregate(
            "union",
            "Union of values",
            "Create a set union of all values",
            "union(value: any) -> set",
            &[("value", "Values to union")],
        ),
        LanguageElement::aggregate(
            "fuse",
            "Fuse schemas in group",
            "Fuse schemas together within a group",
            "fuse(value: any) -> type",
            &[("value", "Values to fuse")],
        ),
        LanguageElement::aggregate(
            "and",
            "Logical AND aggregate",
            "Returns true if all values in the group are true",
            "and(value: bool) -> bool",
            &[("value", "Boolean values")],
        ),
        LanguageElement::aggregate(
            "or",
            "Logical OR aggregate",
            "Returns true if any value in the group is true",
            "or(value: bool) -> bool",
            &[("value", "Boolean values")],
        ),
        LanguageElement::aggregate(
            "first",
            "First value in group",
            "Return the first value encountered in a group",
            "first(value: any) -> any",
            &[("value", "Values to select from")],
        ),
        LanguageElement::aggregate(
            "last",
            "Last value in group",
            "Return the last value encountered in a group",
            "last(value: any) -> any",
            &[("value", "Values to select from")],
        ),
    ]
}
