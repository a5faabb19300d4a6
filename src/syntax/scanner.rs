//! Lexical scanning helpers shared by every translation pass.
//!
//! All helpers take the source buffer and a byte offset and return the offset of the
//! next unconsumed byte. Unterminated comments and literals consume the rest of the
//! buffer instead of failing.

use thiserror::Error;

use super::ident::{
    decode_rune,
    is_ident_part,
    is_ident_start,
    rune_width,
};

/// Prefix that forces the following word to be read as a plain identifier.
pub const ESCAPE_MARKER: u8 = b'@';

/// Raised when code (outside any comment or literal) is not valid UTF-8.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid UTF-8 at byte {offset}")]
pub struct InvalidUtf8 {
    /// Byte offset of the first undecodable byte.
    pub offset: usize,
}

/// Skips `//` through the end of the line, newline included.
#[must_use]
pub fn skip_line_comment(src: &[u8], start: usize) -> usize {
    src.get(start..)
        .and_then(|rest| rest.iter().position(|&b| b == b'\n'))
        .map_or(src.len(), |pos| start + pos + 1)
}

/// Skips `/*` through the first `*/`, or to the end of the buffer.
#[must_use]
pub fn skip_block_comment(src: &[u8], start: usize) -> usize {
    let body_start = (start + 2).min(src.len());
    src.get(body_start..)
        .and_then(|rest| rest.windows(2).position(|pair| pair == b"*/"))
        .map_or(src.len(), |pos| body_start + pos + 2)
}

/// Skips a literal delimited by `quote`, honoring backslash escapes.
fn skip_quoted(src: &[u8], start: usize, quote: u8) -> usize {
    let mut idx = start + 1;
    while let Some(&byte) = src.get(idx) {
        if byte == b'\\' {
            idx += 1;
            if idx < src.len() {
                idx += rune_width(src, idx);
            }
        } else if byte == quote {
            return idx + 1;
        } else {
            idx += rune_width(src, idx);
        }
    }
    src.len()
}

/// Skips a `"…"` literal, honoring backslash escapes.
#[must_use]
pub fn skip_interpreted_string(src: &[u8], start: usize) -> usize {
    skip_quoted(src, start, b'"')
}

/// Skips a `'…'` literal, honoring backslash escapes.
#[must_use]
pub fn skip_rune_literal(src: &[u8], start: usize) -> usize {
    skip_quoted(src, start, b'\'')
}

/// Skips a `` `…` `` literal. Raw strings have no escapes.
#[must_use]
pub fn skip_raw_string(src: &[u8], start: usize) -> usize {
    let body_start = (start + 1).min(src.len());
    src.get(body_start..)
        .and_then(|rest| rest.iter().position(|&b| b == b'`'))
        .map_or(src.len(), |pos| body_start + pos + 1)
}

/// If a comment or a string/rune/raw-string literal starts at `idx`, returns its end.
#[must_use]
pub fn skip_literal_or_comment(src: &[u8], idx: usize) -> Option<usize> {
    match src.get(idx)? {
        b'/' => match src.get(idx + 1)? {
            b'/' => Some(skip_line_comment(src, idx)),
            b'*' => Some(skip_block_comment(src, idx)),
            _ => None,
        },
        b'"' => Some(skip_interpreted_string(src, idx)),
        b'\'' => Some(skip_rune_literal(src, idx)),
        b'`' => Some(skip_raw_string(src, idx)),
        _ => None,
    }
}

/// Reads an identifier starting at `start`.
///
/// Returns `start` unchanged if no identifier starts there.
#[must_use]
pub fn read_ident(src: &[u8], start: usize) -> usize {
    let mut idx = start;
    while let Some((c, width)) = decode_rune(src, idx) {
        let accepted = if idx == start { is_ident_start(c) } else { is_ident_part(c) };
        if !accepted {
            break;
        }
        idx += width;
    }
    idx
}

/// If an escape marker directly followed by an identifier start sits at `idx`, returns
/// the offset of that identifier.
#[must_use]
pub fn escaped_ident_start(src: &[u8], idx: usize) -> Option<usize> {
    if src.get(idx) != Some(&ESCAPE_MARKER) {
        return None;
    }
    let (c, _) = decode_rune(src, idx + 1)?;
    is_ident_start(c).then_some(idx + 1)
}

/// Skips whitespace and comments from `idx`.
///
/// With `same_line`, gives up (`None`) at the first newline or line comment, since
/// either ends the current line.
#[must_use]
pub fn skip_trivia(src: &[u8], mut idx: usize, same_line: bool) -> Option<usize> {
    loop {
        match src.get(idx) {
            Some(b'\n') if same_line => return None,
            Some(b' ' | b'\t' | b'\n' | b'\r') => idx += 1,
            Some(b'/') => match src.get(idx + 1) {
                Some(b'/') if same_line => return None,
                Some(b'/') => idx = skip_line_comment(src, idx),
                Some(b'*') => idx = skip_block_comment(src, idx),
                _ => return Some(idx),
            },
            _ => return Some(idx),
        }
    }
}

/// Returns true if a `:=` operator starts at `idx`.
#[must_use]
pub fn starts_declare(src: &[u8], idx: usize) -> bool {
    src.get(idx..idx + 2) == Some(b":=".as_slice())
}

/// An identifier found in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentToken {
    /// First byte of the identifier itself (after the marker when escaped).
    pub start: usize,
    /// One past the last byte of the identifier.
    pub end: usize,
    /// Written as `@name`.
    pub escaped: bool,
}

impl IdentToken {
    /// Offset where the token's source text begins, escape marker included.
    #[must_use]
    pub const fn source_start(&self) -> usize {
        if self.escaped { self.start - 1 } else { self.start }
    }

    /// The identifier text, without the escape marker.
    #[must_use]
    pub fn text<'a>(&self, src: &'a [u8]) -> &'a str {
        src.get(self.start..self.end)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }
}

/// Iterator over the identifiers of a buffer, skipping comments and literals.
///
/// Yields [`InvalidUtf8`] once and then stops when code contains malformed UTF-8.
#[derive(Debug, Clone)]
pub struct IdentTokens<'a> {
    /// Buffer being scanned.
    src: &'a [u8],
    /// Next byte to look at.
    idx: usize,
}

impl Iterator for IdentTokens<'_> {
    type Item = Result<IdentToken, InvalidUtf8>;

    fn next(&mut self) -> Option<Self::Item> {
        let src = self.src;
        while self.idx < src.len() {
            let idx = self.idx;
            let Some((c, width)) = decode_rune(src, idx) else {
                self.idx = src.len();
                return Some(Err(InvalidUtf8 { offset: idx }));
            };

            if let Some(end) = skip_literal_or_comment(src, idx) {
                self.idx = end;
                continue;
            }

            if let Some(start) = escaped_ident_start(src, idx) {
                let end = read_ident(src, start);
                self.idx = end;
                return Some(Ok(IdentToken { start, end, escaped: true }));
            }

            if is_ident_start(c) {
                let end = read_ident(src, idx);
                self.idx = end;
                return Some(Ok(IdentToken { start: idx, end, escaped: false }));
            }

            self.idx += width;
        }
        None
    }
}

/// Returns an iterator over every identifier token in `src`.
#[must_use]
pub const fn ident_tokens(src: &[u8]) -> IdentTokens<'_> {
    ident_tokens_from(src, 0)
}

/// Like [`ident_tokens`], starting at byte `start`. Offsets stay relative to `src`.
#[must_use]
pub const fn ident_tokens_from(src: &[u8], start: usize) -> IdentTokens<'_> {
    IdentTokens { src, idx: start }
}

/// Returns the plain (non-escaped) identifiers of `src`, stopping silently at malformed
/// UTF-8.
pub fn plain_identifiers(src: &[u8]) -> impl Iterator<Item = &str> {
    ident_tokens(src)
        .map_while(Result::ok)
        .filter(|token| !token.escaped)
        .map(move |token| token.text(src))
}
