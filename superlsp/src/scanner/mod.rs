//! Word and context scanning over raw document text
//!
//! Everything here works on plain text without a parse, so it keeps working
//! on half-typed and invalid queries. Positions use LSP conventions: zero-based
//! lines split on `\n`, columns in UTF-16 code units. Identifier characters are
//! ASCII, so once a column is mapped to a byte offset all scanning is bytewise.

use tower_lsp::lsp_types::{Position, Range};

/// Completion context inferred from the text left of the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionContext {
    General,
    /// After `cast(`, `::` or an opening `<`
    Type,
    /// Inside an unclosed call's argument list
    Function,
}

/// Identifier under the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub range: Range,
}

/// A resolved cursor: the line it sits on and its byte offset in that line
#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'a> {
    pub line: &'a str,
    pub offset: usize,
}

impl<'a> LineCursor<'a> {
    /// Text of the line left of the cursor
    pub fn before(&self) -> &'a str {
        &self.line[..self.offset]
    }
}

pub fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// The `line`-th line of `text`, if it exists
pub fn line_at(text: &str, line: u32) -> Option<&str> {
    text.split('\n').nth(line as usize)
}

/// Byte offset of a UTF-16 column within a line.
///
/// Returns `None` past the end of the line. A column inside a surrogate pair
/// maps to the start of that character.
pub fn utf16_to_byte(line: &str, character: u32) -> Option<usize> {
    let target = character as usize;
    let mut units = 0usize;
    for (idx, ch) in line.char_indices() {
        if units >= target {
            return Some(idx);
        }
        units += ch.len_utf16();
        if units > target {
            return Some(idx);
        }
    }
    (units == target).then_some(line.len())
}

/// UTF-16 length of `s[..byte]`
pub fn byte_to_utf16(s: &str, byte: usize) -> u32 {
    s.get(..byte)
        .map_or(0, |head| head.encode_utf16().count() as u32)
}

/// Resolve a position to a line and byte offset; `None` when out of range
pub fn cursor_at(text: &str, position: Position) -> Option<LineCursor<'_>> {
    let line = line_at(text, position.line)?;
    let offset = utf16_to_byte(line, position.character)?;
    Some(LineCursor { line, offset })
}

/// Identifier run ending at `offset`, empty when the cursor abuts a
/// non-identifier character
pub fn prefix_at(line: &str, offset: usize) -> &str {
    let bytes = line.as_bytes();
    let mut start = offset;
    while start > 0 && is_ident_char(bytes[start - 1]) {
        start -= 1;
    }
    &line[start..offset]
}

/// Get the identifier touching the cursor
pub fn word_at(text: &str, position: Position) -> Option<Word<'_>> {
    let LineCursor { line, offset } = cursor_at(text, position)?;
    let bytes = line.as_bytes();

    let mut start = offset;
    while start > 0 && is_ident_char(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = offset;
    while end < bytes.len() && is_ident_char(bytes[end]) {
        end += 1;
    }

    if start == end {
        return None;
    }

    Some(Word {
        text: &line[start..end],
        range: Range::new(
            Position::new(position.line, byte_to_utf16(line, start)),
            Position::new(position.line, byte_to_utf16(line, end)),
        ),
    })
}

/// Classify the text preceding the cursor on its line.
///
/// Textual heuristic: parentheses inside string literals or comments are
/// counted like any other.
pub fn context_of(line_prefix: &str) -> CompletionContext {
    let prefix = line_prefix.to_ascii_lowercase();

    if prefix.contains("cast(") || prefix.contains("::") || prefix.trim().ends_with('<') {
        return CompletionContext::Type;
    }

    let open = prefix.matches('(').count() as isize;
    let close = prefix.matches(')').count() as isize;
    if open - close > 0 {
        return CompletionContext::Function;
    }

    CompletionContext::General
}
