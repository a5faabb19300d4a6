//! Identifier rune classes.
//!
//! Localized identifiers may carry combining marks (Bengali vowel signs,
//! Devanagari viramas, Latin diacritics written as marks) so the scanner
//! accepts them as identifier parts. Go itself does not, which is why
//! [`is_valid_host_ident`] is stricter than [`is_ident_part`].

use unicode_general_category::{
    GeneralCategory,
    get_general_category,
};

/// Unicode letter (Lu, Ll, Lt, Lm, Lo).
fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Unicode decimal digit (Nd).
fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Combining mark (Mn, Mc, Me).
fn is_mark(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark | GeneralCategory::EnclosingMark
    )
}

/// Returns true if `c` can start an identifier: `_` or any Unicode letter.
#[must_use]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

/// Returns true if `c` can continue an identifier: a start rune, a decimal digit or a
/// combining mark.
#[must_use]
pub fn is_ident_part(c: char) -> bool {
    is_ident_start(c) || is_digit(c) || is_mark(c)
}

/// Returns true if `ident` is a valid Go identifier.
///
/// Go accepts letters, decimal digits and `_` only; combining marks are rejected.
#[must_use]
pub fn is_valid_host_ident(ident: &str) -> bool {
    let mut chars = ident.chars();
    chars.next().is_some_and(is_ident_start)
        && chars.all(|c| c == '_' || is_letter(c) || is_digit(c))
}

/// Decodes one UTF-8 scalar at `idx`.
///
/// Returns the rune and its width in bytes, or `None` when `idx` is out of bounds or the
/// bytes there are not a well-formed UTF-8 sequence.
#[must_use]
pub fn decode_rune(src: &[u8], idx: usize) -> Option<(char, usize)> {
    let width = match *src.get(idx)? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let bytes = src.get(idx..idx + width)?;
    let c = std::str::from_utf8(bytes).ok()?.chars().next()?;
    Some((c, width))
}

/// Width of the rune at `idx`, treating an undecodable byte as a single byte.
#[must_use]
pub fn rune_width(src: &[u8], idx: usize) -> usize {
    decode_rune(src, idx).map_or(1, |(_, width)| width)
}
