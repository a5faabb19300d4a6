//! Per-file direction detection.

use super::Direction;
use crate::keymap::Maps;
use crate::syntax::plain_identifiers;

/// Decides which way `body` should be translated.
///
/// Any mapped Go keyword or predeclared identifier means the file is written in Go and
/// gets localized; otherwise it is treated as localized source. Escaped identifiers,
/// comments and literals are ignored.
#[must_use]
pub fn detect_direction(body: &[u8], maps: &Maps) -> Direction {
    if plain_identifiers(body).any(|ident| maps.is_host(ident)) {
        Direction::HostToLocal
    } else {
        Direction::LocalToHost
    }
}

/// Returns true if `src` uses a localized keyword or predeclared name that is not also a
/// Go name.
#[must_use]
pub fn contains_localized_keywords(src: &[u8], maps: &Maps) -> bool {
    plain_identifiers(src).any(|ident| !maps.is_host(ident) && maps.is_local(ident))
}
