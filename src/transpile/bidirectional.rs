//! Translation in whichever direction the file calls for.

use std::borrow::Cow;
use std::path::Path;

use super::compact::compact_commas_in_braces;
use super::direction::detect_direction;
use super::header::build_tag_prefix_len;
use super::{
    Direction,
    TranspileError,
};
use crate::keymap::Maps;
use crate::syntax::{
    ESCAPE_MARKER,
    ident_tokens_from,
    scanner::{
        skip_trivia,
        starts_declare,
    },
};

/// Translates `src` to localized form if it is written in Go, or to Go otherwise.
///
/// The build-constraint header is copied unchanged. Escaped identifiers lose their marker
/// and are never looked up. `path` is only used for diagnostics.
pub fn transpile_file(path: &Path, src: &[u8], maps: &Maps) -> Result<Vec<u8>, TranspileError> {
    let header_len = build_tag_prefix_len(src);
    let (header, body) = src.split_at(header_len);
    let direction = detect_direction(body, maps);
    tracing::debug!(path = %path.display(), ?direction, "Transpiling file");

    let translated = transpile_body(src, header_len, maps, direction)?;
    let translated = match direction {
        Direction::HostToLocal => compact_commas_in_braces(&translated),
        Direction::LocalToHost => translated,
    };

    let mut out = Vec::with_capacity(header.len() + translated.len());
    out.extend_from_slice(header);
    out.extend_from_slice(&translated);
    Ok(out)
}

/// Rewrites every identifier of `src` from byte `start` on.
fn transpile_body(
    src: &[u8],
    start: usize,
    maps: &Maps,
    direction: Direction,
) -> Result<Vec<u8>, TranspileError> {
    let mut out = Vec::with_capacity(src.len().saturating_sub(start));
    let mut last = start;

    for token in ident_tokens_from(src, start) {
        let token = token?;
        out.extend_from_slice(src.get(last..token.source_start()).unwrap_or_default());
        last = token.end;

        let ident = token.text(src);
        let replacement =
            if token.escaped { Cow::Borrowed(ident) } else { translate_ident(src, token.end, ident, maps, direction) };
        out.extend_from_slice(replacement.as_bytes());
    }

    out.extend_from_slice(src.get(last..).unwrap_or_default());
    Ok(out)
}

/// Looks `ident` up in the tables for `direction`.
fn translate_ident<'a>(
    src: &[u8],
    ident_end: usize,
    ident: &'a str,
    maps: &'a Maps,
    direction: Direction,
) -> Cow<'a, str> {
    let mapped = match direction {
        Direction::LocalToHost => maps.local_keyword(ident).or_else(|| maps.local_predeclared(ident)),
        Direction::HostToLocal => maps.host_predeclared(ident).or_else(|| maps.host_keyword(ident)),
    };
    if let Some(mapped) = mapped {
        return Cow::Borrowed(mapped);
    }

    // A Go name spelled like a localized keyword would be read back as that keyword.
    if direction == Direction::HostToLocal && maps.is_local(ident) && declared_here(src, ident_end) {
        return Cow::Owned(format!("{}{ident}", char::from(ESCAPE_MARKER)));
    }
    Cow::Borrowed(ident)
}

/// Returns true if `:=` follows `idx`, skipping whitespace and comments.
fn declared_here(src: &[u8], idx: usize) -> bool {
    skip_trivia(src, idx, false).is_some_and(|next| starts_declare(src, next))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::{
        chinese_maps,
        spanish_maps,
        utf8,
    };

    /// Translates `src` as `main.p.go`, expecting success.
    fn transpile(src: &str, maps: &Maps) -> String {
        utf8(transpile_file(Path::new("main.p.go"), src.as_bytes(), maps).unwrap())
    }

    /// Localized source becomes Go.
    #[rstest]
    #[case::keywords_and_predeclared("si a == nulo { retornar verdadero }", "if a == nil { return true }")]
    #[case::escaped_keyword("@tipo := 5", "tipo := 5")]
    #[case::unknown_identifiers_kept("x := y + z", "x := y + z")]
    #[case::comments_and_strings(
        "si x { // retornar\n\tf(\"nulo\", 'n', `tipo`) /* verdadero */ }",
        "if x { // retornar\n\tf(\"nulo\", 'n', `tipo`) /* verdadero */ }"
    )]
    #[case::no_comma_compaction("longitud([]entero{1, 2})", "len([]int{1, 2})")]
    fn test_local_to_host(#[case] src: &str, #[case] expected: &str) {
        assert_eq!(transpile(src, &spanish_maps()), expected);
    }

    /// Go becomes localized source.
    #[rstest]
    #[case::keywords_and_predeclared("if a == nil { return true }", "si a == nulo { retornar verdadero }")]
    #[case::declared_name_needs_escape("func f() { tipo := 5 }", "funcion f() { @tipo := 5 }")]
    #[case::declare_after_comment("func f() { tipo /* x */ := 5 }", "funcion f() { @tipo /* x */ := 5 }")]
    #[case::assigned_name_not_escaped("func f() { tipo = 5 }", "funcion f() { tipo = 5 }")]
    #[case::escaped_go_name("func f() { @x := 1 }", "funcion f() { x := 1 }")]
    fn test_host_to_local(#[case] src: &str, #[case] expected: &str) {
        assert_eq!(transpile(src, &spanish_maps()), expected);
    }

    /// Composite literals lose spaces after commas.
    #[rstest]
    fn test_host_to_local_compacts_composite_literals() {
        let out = transpile("len([]int{1,2, 3})", &chinese_maps());

        assert_eq!(out, "长度([]整数{1,2,3})");
    }

    /// The build-constraint header is copied unchanged.
    #[rstest]
    fn test_header_is_preserved() {
        let src = "//go:build ignore\n// +build ignore\n\npaquete main\n";

        assert_eq!(transpile(src, &spanish_maps()), "//go:build ignore\n// +build ignore\n\npackage main\n");
    }

    /// Names in the header do not decide the direction.
    #[rstest]
    fn test_header_does_not_affect_direction() {
        // `if` in the header must not switch the file to localization.
        let src = "//go:build if\nsi x {}\n";

        assert_eq!(transpile(src, &spanish_maps()), "//go:build if\nif x {}\n");
    }

    /// A Go name spelled like a localized keyword survives the round trip only where it is declared.
    #[rstest]
    fn test_only_declarations_are_escaped() {
        let maps = spanish_maps();
        let host = "package main\n\nfunc main() {\n\ttipo := []int{1,2}\n\t_ = tipo\n}\n";

        let local = transpile(host, &maps);
        let back = transpile(&local, &maps);

        assert_that!(local.as_str(), contains_substring("@tipo := []entero{1,2}"));
        assert_eq!(back, "package main\n\nfunc main() {\n\ttipo := []int{1,2}\n\t_ = type\n}\n");
    }

    /// Offsets count from the start of the file.
    #[rstest]
    fn test_invalid_utf8_reports_file_offset() {
        let src = b"//go:build x\nsi \xFF";

        let result = transpile_file(Path::new("bad.p.go"), src, &spanish_maps());

        assert_eq!(result, Err(TranspileError::Encoding { offset: 16 }));
    }

    /// Malformed bytes in comments are copied.
    #[rstest]
    fn test_invalid_utf8_inside_comment_is_copied() {
        let src = b"si x {} // \xFF\n";

        let out = transpile_file(Path::new("main.p.go"), src, &spanish_maps()).unwrap();

        assert_eq!(out, b"if x {} // \xFF\n".to_vec());
    }
}
