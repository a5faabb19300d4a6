//! Whitespace compaction after commas inside composite literals.
//!
//! `[]int{1, 2, 3}` becomes `[]int{1,2,3}`. A brace counts as a composite literal only
//! when written directly after `]` and a type name, so blocks and struct literals keep
//! their formatting.

use crate::syntax::{
    decode_rune,
    is_ident_start,
    scanner::{
        read_ident,
        skip_literal_or_comment,
    },
};

/// Kind of a significant token, as far as brace classification cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Start of input.
    None,
    /// Identifier.
    Ident,
    /// `]`
    RBracket,
    /// Anything else, whitespace included.
    Other,
}

/// Scanner state for [`compact_commas_in_braces`].
#[derive(Debug)]
struct Compactor {
    /// Token before `last`.
    prev: Token,
    /// Most recent token.
    last: Token,
    /// One entry per open `{`: true for composite literals.
    braces: Vec<bool>,
}

impl Compactor {
    /// State at the start of input.
    const fn new() -> Self {
        Self { prev: Token::None, last: Token::None, braces: Vec::new() }
    }

    /// Records `token` as the most recent one.
    const fn push(&mut self, token: Token) {
        self.prev = self.last;
        self.last = token;
    }

    /// Whether the innermost open brace is a composite literal.
    fn in_composite(&self) -> bool {
        self.braces.last().copied().unwrap_or(false)
    }
}

/// Removes spaces and tabs that follow a comma inside composite-literal braces.
///
/// Comments and literals are copied unchanged. Never fails: bytes that are not valid
/// UTF-8 are copied through.
#[must_use]
pub fn compact_commas_in_braces(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    let mut state = Compactor::new();
    let mut idx = 0;

    while let Some(&byte) = src.get(idx) {
        if let Some(end) = skip_literal_or_comment(src, idx) {
            out.extend_from_slice(src.get(idx..end).unwrap_or_default());
            idx = end;
            continue;
        }

        if let Some((c, _)) = decode_rune(src, idx)
            && is_ident_start(c)
        {
            let end = read_ident(src, idx);
            out.extend_from_slice(src.get(idx..end).unwrap_or_default());
            state.push(Token::Ident);
            idx = end;
            continue;
        }

        out.push(byte);
        idx += 1;
        match byte {
            b']' => state.push(Token::RBracket),
            b'{' => {
                let composite = state.prev == Token::RBracket && state.last == Token::Ident;
                state.braces.push(composite);
                state.push(Token::Other);
            }
            b'}' => {
                state.braces.pop();
                state.push(Token::Other);
            }
            b',' if state.in_composite() => {
                while matches!(src.get(idx), Some(b' ' | b'\t')) {
                    idx += 1;
                }
                state.push(Token::Other);
            }
            _ => state.push(Token::Other),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// Only braces right after `]` and a type name are compacted.
    #[rstest]
    #[case::slice_literal("[]int{1, 2, 3}", "[]int{1,2,3}")]
    #[case::tabs("[]int{1,\t2}", "[]int{1,2}")]
    #[case::localized_type("[]整数{1,2, 3}", "[]整数{1,2,3}")]
    #[case::array_literal("[3]int{1, 2, 3}", "[3]int{1,2,3}")]
    #[case::newline_kept("[]int{\n\t1,\n\t2,\n}", "[]int{\n\t1,\n\t2,\n}")]
    #[case::block("if a { f(1, 2) }", "if a { f(1, 2) }")]
    #[case::struct_literal("T{A: 1, B: 2}", "T{A: 1, B: 2}")]
    #[case::space_before_brace("[]int {1, 2}", "[]int {1, 2}")]
    #[case::map_literal("map[string]int{\"a\": 1, \"b\": 2}", "map[string]int{\"a\": 1,\"b\": 2}")]
    #[case::nested_composite("[][]int{[]int{1, 2}, {3, 4}}", "[][]int{[]int{1,2},{3, 4}}")]
    #[case::call_result("[]int{f(1, 2), 3}", "[]int{f(1,2),3}")]
    #[case::string_untouched("[]string{\"a, b\", \"c\"}", "[]string{\"a, b\",\"c\"}")]
    #[case::comment_untouched("[]int{1, /* a, b */ 2}", "[]int{1,/* a, b */ 2}")]
    #[case::unbalanced_close("}, a", "}, a")]
    #[case::empty("", "")]
    fn test_compact_commas_in_braces(#[case] src: &str, #[case] expected: &str) {
        let out = compact_commas_in_braces(src.as_bytes());

        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    /// Bytes that do not decode are copied through.
    #[rstest]
    fn test_invalid_bytes_are_copied() {
        let src = b"[]int{1, \xFF, 2}";

        assert_eq!(compact_commas_in_braces(src), b"[]int{1,\xFF,2}".to_vec());
    }
}
