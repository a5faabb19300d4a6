//! Strict localized-to-Go translation used when generating a module.

use std::collections::HashSet;
use std::path::Path;

use super::TranspileError;
use super::header::build_tag_prefix_len;
use super::mangle::host_safe;
use crate::keymap::Maps;
use crate::syntax::{
    decode_rune,
    ident_tokens_from,
    is_ident_start,
    scanner::{
        read_ident,
        skip_trivia,
        starts_declare,
    },
};

/// Translates localized source to Go.
///
/// Unlike [`super::transpile_file`] the direction is fixed, bare Go keywords are rejected
/// unless the maps allow them, and identifiers Go cannot accept are mangled. Writing
/// `@name` once pins that spelling: later plain `name` tokens in the same file are kept
/// as identifiers too.
pub fn transpile_file_localized_to_host(
    path: &Path,
    src: &[u8],
    maps: &Maps,
) -> Result<Vec<u8>, TranspileError> {
    let start = build_tag_prefix_len(src);
    tracing::debug!(path = %path.display(), "Transpiling localized file");

    let mut out = Vec::with_capacity(src.len());
    out.extend_from_slice(src.get(..start).unwrap_or_default());
    let mut last = start;
    let mut pinned: HashSet<&str> = HashSet::new();
    let channel = maps.channel_keyword();

    for token in ident_tokens_from(src, start) {
        let token = token?;
        out.extend_from_slice(src.get(last..token.source_start()).unwrap_or_default());
        last = token.end;

        let ident = token.text(src);
        if token.escaped {
            pinned.insert(ident);
            out.extend_from_slice(host_safe(ident).as_bytes());
            continue;
        }
        if pinned.contains(ident) {
            out.extend_from_slice(host_safe(ident).as_bytes());
            continue;
        }

        reject_host_name(ident, maps)?;
        if channel == Some(ident) && chan_should_be_dropped(src, token.end) {
            tracing::trace!(offset = token.start, "Dropped channel keyword before declaration");
            continue;
        }

        match maps.local_keyword(ident).or_else(|| maps.local_predeclared(ident)) {
            Some(host) => out.extend_from_slice(host.as_bytes()),
            None => out.extend_from_slice(host_safe(ident).as_bytes()),
        }
    }

    out.extend_from_slice(src.get(last..).unwrap_or_default());
    Ok(out)
}

/// Fails when a bare Go name appears where the maps require the localized spelling.
fn reject_host_name(ident: &str, maps: &Maps) -> Result<(), TranspileError> {
    if maps.allow_host_keywords() || maps.is_local(ident) || !maps.is_host(ident) {
        return Ok(());
    }
    Err(TranspileError::DisallowedHostKeyword { ident: ident.to_owned() })
}

/// Returns true if the channel keyword ending at `ident_end` is followed, on the same
/// line, by an identifier and `:=`.
///
/// Covers the localized idiom `চ্যানেল ch := make(...)`, where the keyword names the
/// type of a short variable declaration. Comments between the tokens are skipped; a
/// newline or a line comment stops the lookahead.
#[must_use]
pub fn chan_should_be_dropped(src: &[u8], ident_end: usize) -> bool {
    let Some(idx) = skip_trivia(src, ident_end, true) else {
        return false;
    };
    let Some((c, _)) = decode_rune(src, idx) else {
        return false;
    };
    if !is_ident_start(c) {
        return false;
    }
    let name_end = read_ident(src, idx);
    skip_trivia(src, name_end, true).is_some_and(|next| starts_declare(src, next))
}
